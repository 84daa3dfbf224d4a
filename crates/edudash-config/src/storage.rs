use std::env;
use std::path::PathBuf;

/// Location of the JSON document store.
///
/// - `EDUDASH_DATA_DIR`: data directory (default: `storage/data`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("storage/data"),
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("EDUDASH_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| Self::default().data_dir),
        }
    }
}
