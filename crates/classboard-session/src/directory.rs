//! Credential sources.

use crate::SessionError;
use async_trait::async_trait;
use classboard_models::{Role, User};

/// Where login looks accounts up.
///
/// The lookup is keyed by email. Password verification belongs here too
/// once a source carries password material; see [`SessionStore::login`]
/// for the current state of that.
///
/// [`SessionStore::login`]: crate::SessionStore::login
#[async_trait]
pub trait CredentialSource: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, SessionError>;
}

/// An in-memory account directory.
///
/// Backs the demo deployment and tests; a remote directory would implement
/// [`CredentialSource`] over the auth endpoint instead.
pub struct StaticDirectory {
    users: Vec<User>,
}

impl StaticDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The four demo accounts, one per role.
    pub fn demo() -> Self {
        Self::new(vec![
            User {
                avatar: Some(
                    "https://images.pexels.com/photos/3769021/pexels-photo-3769021.jpeg".into(),
                ),
                phone: Some("+1 (555) 123-4567".into()),
                address: Some("123 Education St, Learning City, LC 12345".into()),
                ..User::new("1", "Dr. Sarah Johnson", "admin@school.edu", Role::Admin)
            },
            User {
                avatar: Some(
                    "https://images.pexels.com/photos/1516680/pexels-photo-1516680.jpeg".into(),
                ),
                phone: Some("+1 (555) 234-5678".into()),
                ..User::new("2", "Michael Chen", "teacher@school.edu", Role::Teacher)
            },
            User {
                avatar: Some(
                    "https://images.pexels.com/photos/3769021/pexels-photo-3769021.jpeg".into(),
                ),
                phone: Some("+1 (555) 345-6789".into()),
                ..User::new("3", "Emma Wilson", "student@school.edu", Role::Student)
            },
            User {
                avatar: Some(
                    "https://images.pexels.com/photos/1516680/pexels-photo-1516680.jpeg".into(),
                ),
                phone: Some("+1 (555) 456-7890".into()),
                ..User::new("4", "Robert Smith", "parent@school.edu", Role::Parent)
            },
        ])
    }
}

#[async_trait]
impl CredentialSource for StaticDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, SessionError> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_directory_has_one_account_per_role() {
        let directory = StaticDirectory::demo();
        for (email, role) in [
            ("admin@school.edu", Role::Admin),
            ("teacher@school.edu", Role::Teacher),
            ("student@school.edu", Role::Student),
            ("parent@school.edu", Role::Parent),
        ] {
            let user = directory.find_by_email(email).await.unwrap().unwrap();
            assert_eq!(user.role, role);
            assert_eq!(user.email, email);
        }
    }

    #[tokio::test]
    async fn test_unknown_email_finds_nothing() {
        let directory = StaticDirectory::demo();
        assert!(
            directory
                .find_by_email("nobody@x.com")
                .await
                .unwrap()
                .is_none()
        );
    }
}
