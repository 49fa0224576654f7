//! Text renderings of each tab.
//!
//! Views take [`AppState`](crate::state::AppState) and the current user and
//! produce plain text for the terminal. Views that poll own their pollers;
//! leaving the view drops them.

pub mod calendar;
pub mod classes;
pub mod dashboard;
pub mod feeds;
pub mod parent_access;
pub mod placeholder;
pub mod students;
