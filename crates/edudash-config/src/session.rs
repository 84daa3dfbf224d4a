use std::env;

use crate::env_or;

const DEFAULT_SECRET: &str = "edudash-session-secret-change-me";

/// Signing settings for persisted session tokens.
///
/// # Environment Variables
///
/// - `EDUDASH_SESSION_SECRET`: HMAC secret for session tokens
/// - `EDUDASH_SESSION_TTL_SECONDS`: token lifetime (default: 604800, 7 days)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub secret: String,
    pub token_ttl_seconds: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            token_ttl_seconds: 604800,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env::var("EDUDASH_SESSION_SECRET").unwrap_or(defaults.secret),
            token_ttl_seconds: env_or("EDUDASH_SESSION_TTL_SECONDS", defaults.token_ttl_seconds),
        }
    }

    /// True when the secret is still the built-in development value.
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}
