//! The closed role set.
//!
//! Roles determine navigation entries and which dashboard variant a user
//! sees. The set is closed: anything outside the four known roles fails to
//! parse, so downstream code never has to reason about arbitrary role
//! strings. Callers that read role values from untrusted places (the session
//! file, an API response) go through [`Role::from_str`] and treat a parse
//! failure as "no role", which denies privileged content.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user's role within the school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
    Parent,
}

/// Error returned when a role string is not one of the four known roles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// All roles, in privilege order (most privileged first).
    pub const ALL: [Role; 4] = [Role::Admin, Role::Teacher, Role::Student, Role::Parent];

    /// The wire/storage representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Parent => "parent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            "parent" => Ok(Role::Parent),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
