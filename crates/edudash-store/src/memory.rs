//! In-process store.
//!
//! Besides backing tests and demos, [`MemoryStore`] can simulate a broken
//! backend ([`MemoryStore::fail_reads`], [`MemoryStore::fail_logout`]) and
//! counts identity lookups so callers can assert when the persisted identity
//! was consulted.

use async_trait::async_trait;
use edudash_models::{Email, User};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::identity::{IdentityStore, UserRecord, find_in, upsert_into};
use crate::records::{Dataset, RecordStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    directory: RwLock<Vec<UserRecord>>,
    current: RwLock<Option<User>>,
    records: RwLock<Dataset>,
    initialized: AtomicBool,
    fail_reads: AtomicBool,
    fail_logout: AtomicBool,
    current_user_calls: AtomicUsize,
    logout_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose persisted identity is already `user`.
    pub fn with_current_user(user: User) -> Self {
        Self {
            current: RwLock::new(Some(user)),
            ..Self::default()
        }
    }

    pub fn with_records(records: Dataset) -> Self {
        Self {
            records: RwLock::new(records),
            ..Self::default()
        }
    }

    /// Makes `initialize_database` and `get_current_user` fail.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes `logout` fail without clearing the persisted identity.
    pub fn fail_logout(&self, fail: bool) {
        self.fail_logout.store(fail, Ordering::SeqCst);
    }

    pub fn current_user_calls(&self) -> usize {
        self.current_user_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// The persisted identity, read without counting as a lookup.
    pub async fn peek_current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    fn check_reads(&self) -> Result<(), StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("reads disabled".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn initialize_database(&self) -> Result<(), StoreError> {
        self.check_reads()?;
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn get_current_user(&self) -> Result<Option<User>, StoreError> {
        self.current_user_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reads()?;
        if !self.is_initialized() {
            return Err(StoreError::NotInitialized);
        }
        Ok(self.current.read().await.clone())
    }

    async fn set_current_user(&self, user: &User) -> Result<(), StoreError> {
        *self.current.write().await = Some(user.clone());
        Ok(())
    }

    async fn logout(&self) -> Result<(), StoreError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_logout.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("logout disabled".into()));
        }
        *self.current.write().await = None;
        Ok(())
    }

    async fn find_user_by_email(&self, email: &Email) -> Result<Option<UserRecord>, StoreError> {
        Ok(find_in(&self.directory.read().await, email).cloned())
    }

    async fn upsert_user(&self, record: UserRecord) -> Result<(), StoreError> {
        upsert_into(&mut *self.directory.write().await, record);
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self
            .directory
            .read()
            .await
            .iter()
            .map(|record| record.user.clone())
            .collect())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load_records(&self) -> Result<Dataset, StoreError> {
        self.check_reads()?;
        Ok(self.records.read().await.clone())
    }

    async fn save_records(&self, records: &Dataset) -> Result<(), StoreError> {
        *self.records.write().await = records.clone();
        Ok(())
    }
}
