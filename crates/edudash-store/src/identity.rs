//! Persisted identity and credential directory.

use async_trait::async_trait;
use edudash_models::{Email, User};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A directory entry: the identity plus its bcrypt password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user: User,
    pub password_hash: String,
}

/// The persisted-identity collaborator.
///
/// `initialize_database` must complete before `get_current_user` is
/// meaningful. Callers treat every error from `get_current_user` as "nobody
/// is signed in" and every error from `logout` as already logged out.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Prepares storage (creates files, seeds empty documents). Idempotent.
    async fn initialize_database(&self) -> Result<(), StoreError>;

    /// The identity persisted by the last sign-in on this device, if any.
    async fn get_current_user(&self) -> Result<Option<User>, StoreError>;

    /// Persists `user` as the signed-in identity.
    async fn set_current_user(&self, user: &User) -> Result<(), StoreError>;

    /// Best-effort removal of the persisted identity.
    async fn logout(&self) -> Result<(), StoreError>;

    /// Looks up a directory entry, comparing emails case-insensitively.
    async fn find_user_by_email(&self, email: &Email) -> Result<Option<UserRecord>, StoreError>;

    /// Inserts or replaces the entry with the same id or email.
    async fn upsert_user(&self, record: UserRecord) -> Result<(), StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
}

/// Inserts `record` into `directory`, replacing an entry with the same id or email.
pub(crate) fn upsert_into(directory: &mut Vec<UserRecord>, record: UserRecord) {
    let key = record.user.email.normalized();
    directory.retain(|existing| {
        existing.user.id != record.user.id && existing.user.email.normalized() != key
    });
    directory.push(record);
}

pub(crate) fn find_in<'a>(directory: &'a [UserRecord], email: &Email) -> Option<&'a UserRecord> {
    let key = email.normalized();
    directory
        .iter()
        .find(|record| record.user.email.normalized() == key)
}
