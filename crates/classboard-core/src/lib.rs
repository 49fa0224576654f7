//! # Classboard Core
//!
//! The dashboard's structural core: role-driven navigation and the generic
//! sortable data table.
//!
//! - [`tabs`]: tab id constants shared by navigation and content dispatch
//! - [`navigation`]: pure resolvers mapping a role to its navigation entries
//!   and an `(active tab, role)` pair to the content variant to render
//! - [`table`]: column-driven table rendering with client-side sort toggling
//!
//! Both resolvers fail closed: an unrecognized role gets the common
//! navigation entries only and is denied role-gated content outright.

pub mod navigation;
pub mod table;
pub mod tabs;

// Re-export commonly used types at crate root
pub use navigation::{
    ClassesVariant, DashboardVariant, Icon, NavItem, ViewVariant, content_for, navigation_for,
};
pub use table::{CellValue, Column, DataTable, SortDirection, SortState, TableView};
