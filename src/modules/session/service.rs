//! Session store.
//!
//! Owns the [`Session`] and is the only thing that changes it. Every mutation
//! takes `&mut self`, so a logout can never interleave with an initialization
//! that is still awaiting the identity store.

use std::sync::Arc;

use edudash_models::User;
use edudash_store::{IdentityStore, StoreError};
use tracing::{info, instrument, warn};

use super::model::Session;

pub struct SessionStore {
    identity: Arc<dyn IdentityStore>,
    session: Session,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(identity: Arc<dyn IdentityStore>) -> Self {
        Self {
            identity,
            session: Session::Anonymous,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Restores the persisted identity.
    ///
    /// Absence and store faults both end in [`Session::Anonymous`]; faults are
    /// only logged.
    #[instrument(skip(self))]
    pub async fn initialize(&mut self) -> Session {
        self.session = match self.restore().await {
            Ok(Some(user)) => {
                info!(user_id = %user.id, role = %user.role, "Restored persisted session");
                edudash_observability::track_session_restored("restored");
                Session::Authenticated(user)
            }
            Ok(None) => {
                info!("No persisted session");
                edudash_observability::track_session_restored("absent");
                Session::Anonymous
            }
            Err(e) => {
                warn!(error = %e, "Identity store unavailable, continuing signed out");
                edudash_observability::track_session_restored("fault");
                Session::Anonymous
            }
        };
        self.session.clone()
    }

    async fn restore(&self) -> Result<Option<User>, StoreError> {
        self.identity.initialize_database().await?;
        self.identity.get_current_user().await
    }

    /// Marks `user` as signed in. The user was validated by whoever authenticated it.
    pub fn login(&mut self, user: User) -> Session {
        info!(user_id = %user.id, role = %user.role, "User logged in");
        edudash_observability::track_login(user.role.as_str());
        self.session = Session::Authenticated(user);
        self.session.clone()
    }

    /// Clears the persisted identity, then the local session.
    ///
    /// The local session is cleared even when the store fails.
    #[instrument(skip(self))]
    pub async fn logout(&mut self) -> Session {
        if let Err(e) = self.identity.logout().await {
            warn!(error = %e, "Failed to clear persisted session");
        }
        if let Some(user) = self.session.user() {
            info!(user_id = %user.id, "User logged out");
        }
        edudash_observability::track_logout();
        self.session = Session::Anonymous;
        self.session.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edudash_models::Email;
    use edudash_store::MemoryStore;

    fn teacher() -> User {
        User::teacher(
            "Grace Hopper",
            Email::new("grace@school.example").unwrap(),
            vec![],
            vec![],
        )
    }

    #[tokio::test]
    async fn test_initialize_restores_persisted_user() {
        let store = Arc::new(MemoryStore::with_current_user(teacher()));
        let mut sessions = SessionStore::new(store.clone());
        let session = sessions.initialize().await;
        assert!(session.is_authenticated());
        assert!(store.is_initialized());
    }

    #[tokio::test]
    async fn test_initialize_without_identity_is_anonymous() {
        let mut sessions = SessionStore::new(Arc::new(MemoryStore::new()));
        assert_eq!(sessions.initialize().await, Session::Anonymous);
    }

    #[tokio::test]
    async fn test_initialize_fault_is_anonymous() {
        let store = Arc::new(MemoryStore::with_current_user(teacher()));
        store.fail_reads(true);
        let mut sessions = SessionStore::new(store);
        assert_eq!(sessions.initialize().await, Session::Anonymous);
    }

    #[tokio::test]
    async fn test_login_then_logout() {
        let store = Arc::new(MemoryStore::new());
        let mut sessions = SessionStore::new(store.clone());
        let user = teacher();
        assert_eq!(sessions.login(user.clone()), Session::Authenticated(user));
        assert_eq!(sessions.logout().await, Session::Anonymous);
        assert_eq!(store.logout_calls(), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_store_fails() {
        let store = Arc::new(MemoryStore::with_current_user(teacher()));
        store.fail_logout(true);
        let mut sessions = SessionStore::new(store.clone());
        sessions.initialize().await;
        assert!(sessions.session().is_authenticated());

        assert_eq!(sessions.logout().await, Session::Anonymous);
        assert!(!sessions.session().is_authenticated());
        // The store still holds the identity; only the local session is gone.
        assert!(store.peek_current_user().await.is_some());
    }
}
