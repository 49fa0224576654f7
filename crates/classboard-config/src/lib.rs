//! # Classboard Config
//!
//! Configuration types for the Classboard dashboard, loaded from
//! environment variables:
//!
//! - [`api`]: base URL of the backend HTTP collaborator
//! - [`session`]: where the durable session state lives on disk
//! - [`poll`]: refresh cadences for the per-view pollers
//!
//! # Example
//!
//! ```ignore
//! use classboard_config::{ApiConfig, PollConfig, SessionConfig};
//!
//! let api = ApiConfig::from_env();
//! let session = SessionConfig::from_env();
//! let poll = PollConfig::from_env();
//! ```

pub mod api;
pub mod poll;
pub mod session;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
pub use poll::PollConfig;
pub use session::SessionConfig;
