//! Validated domain primitives.
//!
//! Newtype wrappers guaranteeing their contents were validated at the
//! boundary, so the rest of the code can pass them around without
//! re-checking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::ValidateEmail;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueTypeError {
    #[error("invalid email: {0}")]
    InvalidEmail(String),
}

/// A validated email address.
///
/// Guaranteed to satisfy the validator crate's email rules. Used wherever an
/// email is accepted from user input, e.g. the parent-access grant form.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Email(String);

impl Email {
    /// Parse and validate an email address.
    pub fn new(email: impl Into<String>) -> Result<Self, ValueTypeError> {
        let email = email.into();
        if email.is_empty() {
            return Err(ValueTypeError::InvalidEmail("email cannot be empty".into()));
        }
        if !email.validate_email() {
            return Err(ValueTypeError::InvalidEmail(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
        Ok(Self(email))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Email {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Deserialize re-validates, so untrusted JSON cannot smuggle in a bad value.
impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(Email::new("parent@example.com").is_ok());
        assert!(Email::new("first.last@school.co.uk").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(Email::new("").is_err());
        assert!(Email::new("not-an-email").is_err());
        assert!(Email::new("@school.edu").is_err());
        assert!(Email::new("user@").is_err());
    }

    #[test]
    fn test_email_parse_and_display() {
        let email: Email = "parent@example.com".parse().unwrap();
        assert_eq!(email.as_str(), "parent@example.com");
        assert_eq!(format!("{}", email), "parent@example.com");
    }

    #[test]
    fn test_email_deserialize_rejects_invalid() {
        let result: Result<Email, _> = serde_json::from_str(r#""nope""#);
        assert!(result.is_err());
        let email: Email = serde_json::from_str(r#""a@b.com""#).unwrap();
        assert_eq!(email.as_str(), "a@b.com");
    }
}
