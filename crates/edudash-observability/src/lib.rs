//! edudash Observability Module
//!
//! Provides configurable observability features including:
//! - Structured logging through `tracing` with console and rolling-file output
//! - Counters for session and navigation events via the `metrics` facade
//!
//! This module can be enabled or disabled at compile time via the `observability` feature flag.
//! At runtime, file logging can be turned off with `OBSERVABILITY_ENABLED=false`.
//!
//! # Features
//!
//! - `observability` (default): rolling log files, JSON logs and metrics counters
//!
//! # Examples
//!
//! ```no_run
//! use edudash_observability::init_tracing;
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guards = init_tracing()?;
//!     // ... application code ...
//!     Ok(())
//! }
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use crate::logging::{LogGuards, init_tracing, is_observability_enabled};
#[cfg(feature = "observability")]
pub use crate::metrics::{
    track_login, track_logout, track_navigation, track_public_form_opened, track_session_restored,
};

#[cfg(not(feature = "observability"))]
pub use stubs::*;

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    /// Nothing to keep alive without file appenders.
    #[derive(Debug, Default)]
    pub struct LogGuards;

    pub fn is_observability_enabled() -> bool {
        false
    }

    /// Falls back to console logging.
    pub fn init_tracing() -> anyhow::Result<LogGuards> {
        super::init_basic_console_logging();
        Ok(LogGuards)
    }

    pub fn track_login(_role: &'static str) {}

    pub fn track_logout() {}

    pub fn track_session_restored(_outcome: &'static str) {}

    pub fn track_navigation(_view: &'static str, _in_role: bool) {}

    pub fn track_public_form_opened() {}
}
