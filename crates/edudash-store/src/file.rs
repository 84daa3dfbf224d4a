//! JSON document store on the local filesystem.
//!
//! Layout of the data directory:
//!
//! ```text
//! <data_dir>/
//! ├── users.json     # credential directory (Vec<UserRecord>)
//! ├── records.json   # Dataset
//! └── session.jwt    # signed token of the signed-in identity, absent when logged out
//! ```
//!
//! Documents are written to a sibling temp file and renamed into place.

use async_trait::async_trait;
use edudash_auth::{create_session_token, verify_session_token};
use edudash_config::{SessionConfig, StorageConfig};
use edudash_models::{Email, User};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::identity::{IdentityStore, UserRecord, find_in, upsert_into};
use crate::records::{Dataset, RecordStore};

const USERS_FILE: &str = "users.json";
const RECORDS_FILE: &str = "records.json";
const SESSION_FILE: &str = "session.jwt";

pub struct FileStore {
    data_dir: PathBuf,
    session_config: SessionConfig,
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("data_dir", &self.data_dir)
            .finish_non_exhaustive()
    }
}

impl FileStore {
    pub fn new(storage: &StorageConfig, session_config: SessionConfig) -> Self {
        Self {
            data_dir: storage.data_dir.clone(),
            session_config,
            write_lock: Mutex::new(()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, StoreError> {
        match fs::read(self.path(file)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotInitialized),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_json<T: Serialize + Sync>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_atomic(file, &bytes).await
    }

    async fn write_atomic(&self, file: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let target = self.path(file);
        let tmp = self.path(&format!("{}.tmp", file));
        fs::write(&tmp, bytes).await?;
        fs::rename(&tmp, &target).await?;
        Ok(())
    }

    async fn create_if_missing<T: Serialize + Sync>(
        &self,
        file: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        if fs::try_exists(self.path(file)).await? {
            return Ok(());
        }
        debug!(file, "Creating empty document");
        self.write_json(file, value).await
    }

    async fn read_directory(&self) -> Result<Vec<UserRecord>, StoreError> {
        self.read_json(USERS_FILE).await
    }
}

#[async_trait]
impl IdentityStore for FileStore {
    async fn initialize_database(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).await?;
        self.create_if_missing(USERS_FILE, &Vec::<UserRecord>::new())
            .await?;
        self.create_if_missing(RECORDS_FILE, &Dataset::default())
            .await?;
        info!(data_dir = %self.data_dir.display(), "Data directory ready");
        Ok(())
    }

    async fn get_current_user(&self) -> Result<Option<User>, StoreError> {
        let token = match fs::read_to_string(self.path(SESSION_FILE)).await {
            Ok(token) => token,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // A token we cannot verify is a stale session, not a failure.
        match verify_session_token(&token, &self.session_config).and_then(|c| c.into_user()) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(error = %e, "Discarding unusable session token");
                Ok(None)
            }
        }
    }

    async fn set_current_user(&self, user: &User) -> Result<(), StoreError> {
        let token = create_session_token(user, &self.session_config)?;
        self.write_atomic(SESSION_FILE, token.as_bytes()).await
    }

    async fn logout(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        match fs::remove_file(self.path(SESSION_FILE)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_user_by_email(&self, email: &Email) -> Result<Option<UserRecord>, StoreError> {
        let directory = self.read_directory().await?;
        Ok(find_in(&directory, email).cloned())
    }

    async fn upsert_user(&self, record: UserRecord) -> Result<(), StoreError> {
        let mut directory = self.read_directory().await?;
        upsert_into(&mut directory, record);
        self.write_json(USERS_FILE, &directory).await
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self
            .read_directory()
            .await?
            .into_iter()
            .map(|record| record.user)
            .collect())
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn load_records(&self) -> Result<Dataset, StoreError> {
        self.read_json(RECORDS_FILE).await
    }

    async fn save_records(&self, records: &Dataset) -> Result<(), StoreError> {
        self.write_json(RECORDS_FILE, records).await
    }
}
