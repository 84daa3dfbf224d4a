//! Validated domain primitives.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::ValidateEmail;

/// Rejected input for a validated primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    EmptyEmail,
    InvalidEmail(String),
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => f.write_str("email address is empty"),
            Self::InvalidEmail(raw) => write!(f, "'{}' is not a valid email address", raw),
        }
    }
}

/// A validated email address, trimmed on construction.
///
/// Directory lookups compare [`Email::normalized`]; the original casing is
/// kept for display and for session tokens.
///
/// ```ignore
/// use edudash_models::Email;
///
/// let email: Email = "Ada@School.example".parse().unwrap();
/// assert_eq!(email.normalized(), "ada@school.example");
/// assert!("not-an-email".parse::<Email>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Result<Self, ValueTypeError> {
        let raw = email.into();
        let trimmed = raw.trim();
        match trimmed {
            "" => Err(ValueTypeError::EmptyEmail),
            addr if addr.validate_email() => Ok(Self(addr.to_string())),
            addr => Err(ValueTypeError::InvalidEmail(addr.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or(self.0.as_str(), |(local, _)| local)
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Email").field(&self.0).finish()
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

impl TryFrom<String> for Email {
    type Error = ValueTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
