//! # Classboard Models
//!
//! Domain models and value types for the Classboard dashboard.
//!
//! This crate provides the data structures shared by the session store, the
//! navigation resolver, the API client, and the views:
//!
//! - [`roles`]: the closed role set driving navigation and authorization
//! - [`users`]: the identity record held by the session store
//! - [`value_types`]: validated domain primitives (email addresses)
//! - [`announcements`]: class announcements and the posting DTO
//! - [`schedule`]: schedule items and the derived "today" view
//! - [`parents`]: parent links and per-child summaries
//! - [`students`]: student listing records

pub mod announcements;
pub mod parents;
pub mod roles;
pub mod schedule;
pub mod students;
pub mod users;
pub mod value_types;

// Re-export commonly used types at crate root
pub use announcements::{Announcement, NewAnnouncement};
pub use parents::{ChildClass, ParentChild, ParentLink};
pub use roles::Role;
pub use schedule::{ScheduleItem, TodayClass};
pub use students::{StudentRecord, demo_students};
pub use users::User;
pub use value_types::{Email, ValueTypeError};
