//! User identity records.

use crate::roles::Role;
use serde::{Deserialize, Serialize};

/// The identity record held by the session store while a user is logged in.
///
/// The role is immutable for the lifetime of the session: it is set when the
/// record is created on login and only ever discarded wholesale on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            avatar: None,
            phone: None,
            address: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serde_round_trip() {
        let user = User {
            phone: Some("+1 (555) 123-4567".to_string()),
            ..User::new("1", "Dr. Sarah Johnson", "admin@school.edu", Role::Admin)
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_user_with_unknown_role_fails_to_deserialize() {
        let json = r#"{"id":"9","name":"X","email":"x@school.edu","role":"superuser"}"#;
        let result: Result<User, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
