//! Strongly-typed value types with validation for domain primitives.
//!
//! # Example
//!
//! ```ignore
//! use campusgate_models::value_types::Email;
//!
//! let email: Email = "user@example.com".parse().unwrap();
//! println!("Email: {}", email);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::ValidateEmail;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    /// The email address is invalid.
    InvalidEmail(String),
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {}", msg),
        }
    }
}

/// A validated email address.
///
/// This type guarantees that the contained string is a valid email address
/// according to the validator crate's email validation rules.
///
/// # Example
///
/// ```ignore
/// use campusgate_models::value_types::Email;
///
/// let email: Email = "user@example.com".parse().unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
///
/// // Invalid emails fail to parse
/// assert!("not-an-email".parse::<Email>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Email(String);

impl Email {
    /// Create a new Email from a string, validating it.
    ///
    /// Returns `Err` if the email is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValueTypeError> {
        let email = email.into();
        Self::validate(&email)?;
        Ok(Self(email))
    }

    /// Create an Email without validation.
    ///
    /// # Safety
    ///
    /// The caller must ensure the email is valid. This is intended for use
    /// when loading from a trusted source where validation was already
    /// performed.
    #[inline]
    pub fn new_unchecked(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner String.
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate an email string.
    fn validate(email: &str) -> Result<(), ValueTypeError> {
        if email.is_empty() {
            return Err(ValueTypeError::InvalidEmail("email cannot be empty".into()));
        }

        if !email.validate_email() {
            return Err(ValueTypeError::InvalidEmail(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = ValueTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = ValueTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Email {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}

impl PartialEq<str> for Email {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<String> for Email {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

// Serde Deserialize with validation
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
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("test.user@example.co.uk").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("head@college.edu").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(Email::new("").is_err());
        assert!(Email::new("not-an-email").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@").is_err());
    }

    #[test]
    fn test_email_display() {
        let email = Email::new("user@example.com").unwrap();
        assert_eq!(format!("{}", email), "user@example.com");
    }

    #[test]
    fn test_email_debug() {
        let email = Email::new("user@example.com").unwrap();
        assert_eq!(format!("{:?}", email), "Email(user@example.com)");
    }

    #[test]
    fn test_email_parse() {
        let email: Email = "user@example.com".parse().unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_email_serialize() {
        let email = Email::new("user@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, r#""user@example.com""#);
    }

    #[test]
    fn test_email_deserialize_valid() {
        let json = r#""user@example.com""#;
        let email: Email = serde_json::from_str(json).unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_email_deserialize_invalid() {
        let json = r#""not-an-email""#;
        let result: Result<Email, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_email_into_string() {
        let email = Email::new("user@example.com").unwrap();
        let s: String = email.into();
        assert_eq!(s, "user@example.com");
    }

    #[test]
    fn test_error_display() {
        let err = ValueTypeError::InvalidEmail("test".into());
        assert_eq!(format!("{}", err), "Invalid email: test");
    }
}
