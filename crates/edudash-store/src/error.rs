use edudash_auth::AuthError;
use edudash_models::FormId;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session token error: {0}")]
    Session(#[from] AuthError),

    #[error("Store has not been initialized")]
    NotInitialized,

    #[error("Feedback form {0} not found")]
    FormNotFound(FormId),

    #[error("Feedback form {0} is closed")]
    FormClosed(FormId),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
