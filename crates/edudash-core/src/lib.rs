//! # edudash Core
//!
//! Core types and utilities shared by every edudash crate:
//!
//! - [`errors`]: Application error type with a coarse error kind
//! - [`password`]: Password hashing and verification for the credential directory
//!
//! # Example
//!
//! ```ignore
//! use edudash_core::errors::AppError;
//! use edudash_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Feedback form not found"));
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//! ```

pub mod errors;
pub mod password;

pub use errors::{AppError, ErrorKind};
pub use password::{hash_password, verify_password};
