//! Password hashing for the credential directory.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash).map_err(|e| {
        tracing::debug!(error = %e, "Stored password hash could not be parsed");
        AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e))
    })
}
