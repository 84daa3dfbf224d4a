//! # edudash Auth
//!
//! Session token support for the persisted-identity store.
//!
//! When a user signs in, the store writes a signed session token. On the next
//! start the token is verified and turned back into a [`User`](edudash_models::User);
//! a missing, expired or tampered token simply means "no persisted identity".
//!
//! - [`claims`]: Claims carried by a session token
//! - [`jwt`]: Token creation and verification
//!
//! # Example
//!
//! ```ignore
//! use edudash_auth::{create_session_token, verify_session_token};
//! use edudash_config::SessionConfig;
//!
//! let config = SessionConfig::from_env();
//! let token = create_session_token(&user, &config)?;
//! let restored = verify_session_token(&token, &config)?.into_user()?;
//! assert_eq!(restored.id, user.id);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::SessionClaims;
pub use jwt::{AuthError, create_session_token, verify_session_token};
