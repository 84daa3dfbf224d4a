use edudash_models::{Role, User};

/// Authentication state of the running app.
///
/// "Authenticated" and "has a user" are the same variant, so a session can
/// never be observed half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edudash_models::Email;

    #[test]
    fn test_anonymous_has_no_user() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.role().is_none());
    }

    #[test]
    fn test_authenticated_exposes_user_and_role() {
        let user = User::student("Ada", Email::new("ada@school.example").unwrap(), None);
        let session = Session::Authenticated(user.clone());
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(&user));
        assert_eq!(session.role(), Some(Role::Student));
    }
}
