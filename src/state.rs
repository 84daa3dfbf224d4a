use std::sync::Arc;

use edudash_config::{SessionConfig, ShellConfig, StorageConfig};
use edudash_store::{FileStore, IdentityStore, RecordStore};
use tracing::warn;

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub shell: ShellConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            session: SessionConfig::from_env(),
            shell: ShellConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }
}

/// Configuration plus the collaborators the app talks to.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub identity: Arc<dyn IdentityStore>,
    pub records: Arc<dyn RecordStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Uses one backend for both identity and records.
    pub fn with_store<S>(config: AppConfig, store: Arc<S>) -> Self
    where
        S: IdentityStore + RecordStore + 'static,
    {
        Self {
            config,
            identity: store.clone(),
            records: store,
        }
    }

    /// File-backed state rooted at `config.storage.data_dir`.
    pub fn from_config(config: AppConfig) -> Self {
        let store = Arc::new(FileStore::new(&config.storage, config.session.clone()));
        Self::with_store(config, store)
    }
}

pub fn init_app_state(config: AppConfig) -> AppState {
    if config.session.uses_default_secret() {
        warn!("EDUDASH_SESSION_SECRET is not set; using the built-in development secret");
    }
    AppState::from_config(config)
}
