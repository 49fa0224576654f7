//! The session store.

use crate::directory::CredentialSource;
use crate::persistence::SessionFile;
use crate::SessionError;
use classboard_config::SessionConfig;
use classboard_models::User;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

/// Holds the one current user (or none) and owns the durable session file.
///
/// The store is created once at startup and passed explicitly to whatever
/// needs it; it is read by many views but written only by [`login`] and
/// [`logout`], both user-initiated.
///
/// [`login`]: SessionStore::login
/// [`logout`]: SessionStore::logout
pub struct SessionStore {
    directory: Arc<dyn CredentialSource>,
    file: SessionFile,
    user: RwLock<Option<User>>,
    logging_in: AtomicBool,
}

impl SessionStore {
    /// Build the store, rehydrating the current user from the session file.
    pub fn new(directory: Arc<dyn CredentialSource>, config: &SessionConfig) -> Self {
        let file = SessionFile::new(config);
        let restored = file.load();
        if let Some(user) = &restored {
            info!(email = %user.email, role = %user.role, "restored session");
        }
        Self {
            directory,
            file,
            user: RwLock::new(restored),
            logging_in: AtomicBool::new(false),
        }
    }

    /// The current user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.read_user().clone()
    }

    /// True strictly while a [`login`](SessionStore::login) call is running.
    pub fn is_logging_in(&self) -> bool {
        self.logging_in.load(Ordering::SeqCst)
    }

    /// Authenticate against the credential source.
    ///
    /// On success the matched user becomes current and is persisted for
    /// reload survival. On failure the current user, logged in or not,
    /// is left exactly as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        self.logging_in.store(true, Ordering::SeqCst);
        let result = self.login_inner(email, password).await;
        self.logging_in.store(false, Ordering::SeqCst);
        result
    }

    async fn login_inner(&self, email: &str, _password: &str) -> Result<User, SessionError> {
        // TODO: verify the password once a credential source carries
        // password material; matching is currently by email alone, which
        // stakeholders have been asked to confirm or reject.
        let user = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or(SessionError::InvalidCredentials)?;

        self.file.save(&user)?;
        *self.write_user() = Some(user.clone());
        info!(email = %user.email, role = %user.role, "logged in");
        Ok(user)
    }

    /// Clear the current user and the persisted session. Idempotent.
    pub fn logout(&self) {
        *self.write_user() = None;
        if let Err(err) = self.file.clear() {
            warn!(%err, "could not remove session file on logout");
        }
        info!("logged out");
    }

    // Lock poisoning only happens if a writer panicked; the stored Option
    // is still coherent, so recover the guard instead of propagating.
    fn read_user(&self) -> RwLockReadGuard<'_, Option<User>> {
        self.user.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_user(&self) -> RwLockWriteGuard<'_, Option<User>> {
        self.user.write().unwrap_or_else(|e| e.into_inner())
    }
}
