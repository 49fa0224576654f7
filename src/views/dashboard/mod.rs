//! Per-role dashboard renderings.

pub mod admin;
pub mod parent;
pub mod student;
pub mod teacher;
