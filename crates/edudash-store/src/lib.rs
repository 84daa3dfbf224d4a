//! # edudash Store
//!
//! Persistence behind the dashboard. Two traits split the concerns:
//!
//! - [`IdentityStore`]: the persisted identity (who is signed in on this
//!   device) and the credential directory used to sign in
//! - [`RecordStore`]: the records feature screens read (grades, homework,
//!   calendar, feedback forms)
//!
//! Two backends implement both:
//!
//! - [`MemoryStore`]: in-process, with switches to inject faults
//! - [`FileStore`]: JSON documents in a data directory, the session kept as a
//!   signed token in `session.jwt`
//!
//! # Example
//!
//! ```ignore
//! use edudash_store::{FileStore, IdentityStore};
//!
//! let store = FileStore::new(&storage_config, session_config);
//! store.initialize_database().await?;
//! if let Some(user) = store.get_current_user().await? {
//!     println!("Welcome back, {}", user.name);
//! }
//! ```

pub mod error;
pub mod file;
pub mod identity;
pub mod memory;
pub mod records;

pub use error::StoreError;
pub use file::FileStore;
pub use identity::{IdentityStore, UserRecord};
pub use memory::MemoryStore;
pub use records::{Dataset, RecordStore};
