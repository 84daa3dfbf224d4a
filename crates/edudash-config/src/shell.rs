//! Shell layout configuration.
//!
//! Controls the initial sidebar visibility and the duration of the two phases
//! of a view transition (outgoing view exits, then incoming view enters).
//!
//! # Environment Variables
//!
//! - `EDUDASH_SIDEBAR_OPEN`: whether the sidebar starts open (default: `true`)
//! - `EDUDASH_TRANSITION_EXIT_MS`: exit phase duration (default: 300)
//! - `EDUDASH_TRANSITION_ENTER_MS`: enter phase duration (default: 300)

use std::time::Duration;

use crate::env_or;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Sidebar visibility when a view state is first created.
    pub sidebar_open: bool,

    /// How long the outgoing view takes to exit.
    pub exit_duration: Duration,

    /// How long the incoming view takes to enter.
    pub enter_duration: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            exit_duration: Duration::from_millis(300),
            enter_duration: Duration::from_millis(300),
        }
    }
}

impl ShellConfig {
    /// Creates a new `ShellConfig` from environment variables.
    ///
    /// Falls back to default values if environment variables are not set
    /// or cannot be parsed.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            sidebar_open: env_or("EDUDASH_SIDEBAR_OPEN", true),
            exit_duration: Duration::from_millis(env_or("EDUDASH_TRANSITION_EXIT_MS", 300)),
            enter_duration: Duration::from_millis(env_or("EDUDASH_TRANSITION_ENTER_MS", 300)),
        }
    }

    /// Configuration with zero-length phases, for presenters that do not animate.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            exit_duration: Duration::ZERO,
            enter_duration: Duration::ZERO,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert!(config.sidebar_open);
        assert_eq!(config.exit_duration, Duration::from_millis(300));
        assert_eq!(config.enter_duration, Duration::from_millis(300));
    }

    #[test]
    fn test_instant_config_keeps_sidebar_default() {
        let config = ShellConfig::instant();
        assert!(config.sidebar_open);
        assert_eq!(config.exit_duration, Duration::ZERO);
        assert_eq!(config.enter_duration, Duration::ZERO);
    }

    #[test]
    fn test_config_debug() {
        let debug_str = format!("{:?}", ShellConfig::default());
        assert!(debug_str.contains("ShellConfig"));
        assert!(debug_str.contains("exit_duration"));
    }
}
