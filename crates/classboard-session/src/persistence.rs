//! The durable session file.
//!
//! One JSON file holds the serialized current user. It is written on login,
//! removed on logout, and read exactly once at startup. Anything wrong with
//! it at read time (unreadable, unparseable, unknown role) degrades to
//! "logged out" with a warning.

use crate::SessionError;
use classboard_config::SessionConfig;
use classboard_models::User;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

const SESSION_FILE_NAME: &str = "classroom_user.json";

/// Handle to the session file under the configured state directory.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            path: config.state_dir.join(SESSION_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted user, failing closed on any defect.
    pub fn load(&self) -> Option<User> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "could not read session file");
                return None;
            }
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    %err,
                    "malformed session file, treating as logged out"
                );
                None
            }
        }
    }

    /// Persist the current user.
    pub fn save(&self, user: &User) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Remove the persisted user. Idempotent: a missing file is fine.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classboard_models::Role;

    fn temp_file() -> SessionFile {
        let dir = std::env::temp_dir().join(format!("classboard-session-{}", uuid::Uuid::new_v4()));
        SessionFile::new(&SessionConfig::new(dir))
    }

    #[test]
    fn test_load_missing_file_is_logged_out() {
        assert!(temp_file().load().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let file = temp_file();
        let user = User::new("3", "Emma Wilson", "student@school.edu", Role::Student);
        file.save(&user).unwrap();
        assert_eq!(file.load(), Some(user));
        file.clear().unwrap();
    }

    #[test]
    fn test_malformed_json_fails_closed() {
        let file = temp_file();
        fs::create_dir_all(file.path().parent().unwrap()).unwrap();
        fs::write(file.path(), "{not json").unwrap();
        assert!(file.load().is_none());
        file.clear().unwrap();
    }

    #[test]
    fn test_unknown_role_fails_closed() {
        let file = temp_file();
        fs::create_dir_all(file.path().parent().unwrap()).unwrap();
        fs::write(
            file.path(),
            r#"{"id":"9","name":"X","email":"x@school.edu","role":"superuser"}"#,
        )
        .unwrap();
        assert!(file.load().is_none());
        file.clear().unwrap();
    }

    #[test]
    fn test_clear_is_idempotent() {
        let file = temp_file();
        file.clear().unwrap();
        file.clear().unwrap();
    }
}
