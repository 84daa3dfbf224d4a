//! Strongly-typed identifiers for domain entities.
//!
//! Entities created by this system get UUID-backed ids ([`UserId`],
//! [`AssignmentId`]). Identifiers that arrive from outside, such as a
//! feedback form id printed in a QR-code link, are opaque string keys
//! ([`FormId`], [`ClassId`]).
//!
//! # Example
//!
//! ```ignore
//! use edudash_models::ids::{FormId, UserId};
//!
//! fn load_form(id: &FormId) { /* ... */ }
//!
//! let form_id = FormId::new("abc123");
//! load_form(&form_id);
//! // load_form(&UserId::new()); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Defines a UUID-backed id newtype.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random ID.
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from a u128 value (useful for constants and fixtures).
            #[inline]
            pub const fn from_u128(v: u128) -> Self {
                Self(Uuid::from_u128(v))
            }

            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

/// Defines an opaque string key newtype.
macro_rules! define_key {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self::new(key)
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for users (students and teachers).
    UserId
);

define_id!(
    /// Strongly-typed ID for assignments.
    AssignmentId
);

define_key!(
    /// Key of a lesson feedback form, as it appears in public form links.
    FormId
);

define_key!(
    /// Name-like key of a school class, e.g. `"10A"`.
    ClassId
);

/// Identifier of loosely keyed records (calendar events, goals) which may be
/// numbered or named.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let a = UserId::new();
        let b = UserId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_debug_format() {
        let id = UserId::from_u128(1);
        assert_eq!(
            format!("{:?}", id),
            "UserId(00000000-0000-0000-0000-000000000001)"
        );
    }

    #[test]
    fn test_id_from_str_invalid() {
        let result: Result<UserId, _> = "invalid-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = AssignmentId::from_u128(0x12345678_1234_1234_1234_123456789abc);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""12345678-1234-1234-1234-123456789abc""#);
    }

    #[test]
    fn test_key_roundtrips_as_plain_string() {
        let form: FormId = serde_json::from_str(r#""abc123""#).unwrap();
        assert_eq!(form.as_str(), "abc123");
        assert_eq!(form.to_string(), "abc123");
        assert_eq!(format!("{:?}", form), "FormId(abc123)");
    }

    #[test]
    fn test_record_key_accepts_numbers_and_strings() {
        let keys: Vec<RecordKey> = serde_json::from_str(r#"[7, "exam-week"]"#).unwrap();
        assert_eq!(keys[0], RecordKey::Number(7));
        assert_eq!(keys[1], RecordKey::Text("exam-week".into()));
        assert_eq!(keys[0].to_string(), "7");
    }
}
