//! Claims carried by a persisted session token.

use edudash_models::{ClassId, Email, Role, User, UserId};
use serde::{Deserialize, Serialize};

use crate::jwt::AuthError;

/// JWT claims for a persisted session.
///
/// The token carries the whole identity so that restoring a session does not
/// need a directory lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID (subject claim)
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<ClassId>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub classes: Vec<ClassId>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl SessionClaims {
    pub fn for_user(user: &User, iat: usize, exp: usize) -> Self {
        Self {
            sub: user.id.to_string(),
            email: user.email.to_string(),
            role: user.role,
            name: user.name.clone(),
            class: user.class.clone(),
            subjects: user.subjects.clone(),
            avatar: user.avatar.clone(),
            classes: user.classes.clone(),
            exp,
            iat,
        }
    }

    /// Rebuilds the identity. Fails when the subject or email no longer parse.
    pub fn into_user(self) -> Result<User, AuthError> {
        let id: UserId = self
            .sub
            .parse()
            .map_err(|_| AuthError::MalformedClaims(format!("subject '{}'", self.sub)))?;
        let email = Email::new(self.email)
            .map_err(|e| AuthError::MalformedClaims(e.to_string()))?;

        Ok(User {
            id,
            email,
            role: self.role,
            name: self.name,
            class: self.class,
            subjects: self.subjects,
            avatar: self.avatar,
            classes: self.classes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher() -> User {
        User::teacher(
            "Grace Hopper",
            Email::new("grace@school.example").unwrap(),
            vec!["Informatics".into()],
            vec!["10A".into(), "11B".into()],
        )
    }

    #[test]
    fn test_claims_keep_identity() {
        let user = teacher();
        let claims = SessionClaims::for_user(&user, 10, 20);
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, Role::Teacher);
        assert_eq!(claims.clone().into_user().unwrap(), user);
    }

    #[test]
    fn test_bad_subject_is_rejected() {
        let mut claims = SessionClaims::for_user(&teacher(), 10, 20);
        claims.sub = "not-a-uuid".into();
        assert!(matches!(
            claims.into_user(),
            Err(AuthError::MalformedClaims(_))
        ));
    }

    #[test]
    fn test_claims_serialize_role_lowercase() {
        let claims = SessionClaims::for_user(&teacher(), 10, 20);
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["role"], "teacher");
        assert_eq!(json["classes"][1], "11B");
    }
}
