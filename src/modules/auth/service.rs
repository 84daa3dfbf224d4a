use edudash_auth::AuthError;
use edudash_core::{AppError, verify_password};
use edudash_models::{Email, User};
use edudash_store::IdentityStore;
use tracing::{instrument, warn};
use validator::Validate;

use super::model::LoginRequest;

pub struct AuthService;

impl AuthService {
    /// Checks credentials against the user directory and persists the
    /// resulting identity.
    ///
    /// Unknown emails and wrong passwords fail the same way. A failure to
    /// persist the identity is logged and the sign-in still succeeds.
    #[instrument(skip(identity, dto), fields(email = %dto.email))]
    pub async fn login_user(identity: &dyn IdentityStore, dto: LoginRequest) -> Result<User, AppError> {
        dto.validate().map_err(AppError::bad_request)?;
        let email = Email::new(&dto.email).map_err(AppError::bad_request)?;

        let record = identity
            .find_user_by_email(&email)
            .await?
            .ok_or_else(|| AppError::unauthorized(AuthError::InvalidCredentials))?;

        let is_valid = verify_password(&dto.password, &record.password_hash)?;
        if !is_valid {
            return Err(AppError::unauthorized(AuthError::InvalidCredentials));
        }

        if let Err(e) = identity.set_current_user(&record.user).await {
            warn!(error = %e, user_id = %record.user.id, "Failed to persist session");
        }

        Ok(record.user)
    }
}
