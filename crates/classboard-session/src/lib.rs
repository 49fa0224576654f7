//! # Classboard Session
//!
//! The session store: exactly one current [`User`](classboard_models::User)
//! at a time, or none.
//!
//! - [`store`]: the [`SessionStore`] handle threaded through the app:
//!   login, logout, and the login-in-progress flag
//! - [`directory`]: the [`CredentialSource`] abstraction and the demo
//!   account directory
//! - [`persistence`]: the durable session file read once at startup and
//!   rewritten on login/logout
//!
//! Rehydration fails closed: a missing, malformed, or unknown-role session
//! file means logged out, never a crash.

pub mod directory;
pub mod persistence;
pub mod store;

use thiserror::Error;

// Re-export commonly used types at crate root
pub use directory::{CredentialSource, StaticDirectory};
pub use persistence::SessionFile;
pub use store::SessionStore;

/// Errors raised by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No directory record matched the submitted credentials. Recovered
    /// locally as a form-level message; session state is unchanged.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The durable session file could not be written or removed.
    #[error("session persistence failed: {0}")]
    Io(#[from] std::io::Error),

    /// The current user could not be serialized for persistence.
    #[error("session serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The credential source itself failed (not a credential mismatch).
    #[error("credential source error: {0}")]
    Directory(String),
}
