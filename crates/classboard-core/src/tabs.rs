//! Tab id constants.
//!
//! Centralized so navigation tables and content dispatch cannot drift apart
//! on a typo'd string literal.

/// The dashboard tab, first entry for every role.
pub const DASHBOARD: &str = "dashboard";
/// Shared calendar view.
pub const CALENDAR: &str = "calendar";
/// Messaging (not yet built; resolves to the under-construction view).
pub const MESSAGES: &str = "messages";
/// Student listing.
pub const STUDENTS: &str = "students";
/// Teacher listing (under construction).
pub const TEACHERS: &str = "teachers";
/// Class views, gated to students and teachers.
pub const CLASSES: &str = "classes";
/// Attendance views (under construction).
pub const ATTENDANCE: &str = "attendance";
/// Grade views (under construction).
pub const GRADES: &str = "grades";
/// Analytics (under construction).
pub const ANALYTICS: &str = "analytics";
/// Settings (under construction).
pub const SETTINGS: &str = "settings";
/// Student-owned parent access management.
pub const PARENT_ACCESS: &str = "parent-access";
