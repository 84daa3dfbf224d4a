//! Session token creation and verification.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use edudash_config::SessionConfig;
use edudash_models::User;

use crate::claims::SessionClaims;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid session token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Malformed session claims: {0}")]
    MalformedClaims(String),
}

/// Creates a signed session token for `user`, valid for `config.token_ttl_seconds`.
pub fn create_session_token(user: &User, config: &SessionConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + config.token_ttl_seconds.max(0) as usize;
    let claims = SessionClaims::for_user(user, now, exp);

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?)
}

/// Verifies signature and expiry and returns the embedded claims.
///
/// # Errors
///
/// Returns [`AuthError::Token`] when the token is malformed, expired, or
/// signed with a different secret.
pub fn verify_session_token(token: &str, config: &SessionConfig) -> Result<SessionClaims, AuthError> {
    let data = decode::<SessionClaims>(
        token.trim(),
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use edudash_models::{Email, Role};

    fn student() -> User {
        User::student(
            "Ada Lovelace",
            Email::new("ada@school.example").unwrap(),
            Some("10A".into()),
        )
    }

    #[test]
    fn test_token_roundtrip_restores_user() {
        let config = SessionConfig::default();
        let user = student();
        let token = create_session_token(&user, &config).unwrap();
        let claims = verify_session_token(&token, &config).unwrap();
        assert_eq!(claims.role, Role::Student);
        assert_eq!(claims.into_user().unwrap(), user);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = create_session_token(&student(), &SessionConfig::default()).unwrap();
        let other = SessionConfig {
            secret: "another-secret".into(),
            ..SessionConfig::default()
        };
        assert!(matches!(
            verify_session_token(&token, &other),
            Err(AuthError::Token(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Well past the default 60s leeway.
        let config = SessionConfig {
            token_ttl_seconds: 0,
            ..SessionConfig::default()
        };
        let user = student();
        let past = (Utc::now().timestamp() - 3600) as usize;
        let claims = SessionClaims::for_user(&user, past - 10, past);
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();
        assert!(verify_session_token(&token, &config).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(verify_session_token("not.a.jwt", &SessionConfig::default()).is_err());
    }
}
