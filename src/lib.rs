//! # Classboard
//!
//! Role-based school dashboard client.
//!
//! The library side of the binary: the interactive shell, the view layer,
//! and the poller primitive. The core pieces live in the workspace crates:
//!
//! ```text
//! crates/
//! ├── classboard-models/    # Users, roles, announcements, schedules
//! ├── classboard-core/      # Navigation resolver and sortable data table
//! ├── classboard-config/    # Env-driven configuration
//! ├── classboard-session/   # Session store with durable persistence
//! └── classboard-api/       # Typed HTTP client for the backend
//! ```

pub mod app;
pub mod logging;
pub mod poller;
pub mod state;
pub mod views;
