//! # edudash Config
//!
//! Configuration types for edudash, loaded from environment variables:
//!
//! - [`session`]: Session token signing and lifetime
//! - [`shell`]: Shell layout defaults and view transition timings
//! - [`storage`]: Location of the persisted data directory
//!
//! # Example
//!
//! ```ignore
//! use edudash_config::{SessionConfig, ShellConfig, StorageConfig};
//!
//! let session_config = SessionConfig::from_env();
//! let shell_config = ShellConfig::from_env();
//! let storage_config = StorageConfig::from_env();
//! ```

pub mod session;
pub mod shell;
pub mod storage;

pub use session::SessionConfig;
pub use shell::ShellConfig;
pub use storage::StorageConfig;

/// Reads an environment variable and parses it, falling back on absence or parse failure.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
