//! Users and roles.
//!
//! A [`User`] is the authenticated identity carried by a session. Its role is
//! fixed when the user is created and never changes while a session holds it.

use crate::ids::{ClassId, UserId};
use crate::value_types::Email;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two roles that can hold a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Student, Role::Teacher];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a role tag that is neither `student` nor `teacher`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// An authenticated identity.
///
/// Students usually carry `class`; teachers carry `subjects` and `classes`.
/// Neither is enforced: the routing core only looks at `role`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub role: Role,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<ClassId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<ClassId>,
}

impl User {
    pub fn student(name: impl Into<String>, email: Email, class: Option<ClassId>) -> Self {
        Self {
            id: UserId::new(),
            email,
            role: Role::Student,
            name: name.into(),
            class,
            subjects: Vec::new(),
            avatar: None,
            classes: Vec::new(),
        }
    }

    pub fn teacher(
        name: impl Into<String>,
        email: Email,
        subjects: Vec<String>,
        classes: Vec<ClassId>,
    ) -> Self {
        Self {
            id: UserId::new(),
            email,
            role: Role::Teacher,
            name: name.into(),
            class: None,
            subjects,
            avatar: None,
            classes,
        }
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(s: &str) -> Email {
        Email::new(s).unwrap()
    }

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!(" Teacher ".parse::<Role>().unwrap(), Role::Teacher);
        assert!("admin".parse::<Role>().is_err());
        assert_eq!(Role::Teacher.to_string(), "teacher");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), r#""student""#);
    }

    #[test]
    fn test_student_constructor() {
        let user = User::student("Ada Lovelace", email("ada@school.example"), Some("10A".into()));
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.first_name(), "Ada");
        assert_eq!(user.class.as_ref().map(ClassId::as_str), Some("10A"));
    }

    #[test]
    fn test_user_json_omits_empty_optionals() {
        let user = User::teacher(
            "Grace Hopper",
            email("grace@school.example"),
            vec!["Informatics".into()],
            vec![],
        );
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "teacher");
        assert_eq!(json["subjects"][0], "Informatics");
        assert!(json.get("classes").is_none());
        assert!(json.get("class").is_none());
    }

    #[test]
    fn test_user_deserializes_minimal_document() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000007",
            "email": "kid@school.example",
            "role": "student",
            "name": "Kid"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId::from_u128(7));
        assert!(user.subjects.is_empty());
        assert!(user.avatar.is_none());
    }
}
