//! Registry configuration
//!
//! Library defaults with runtime environment overrides.
//!
//! # Configuration Priority (highest wins)
//!
//! 1. Builder calls
//! 2. Environment variables (`from_env`)
//! 3. Library defaults (`new`)
//!
//! # Example
//!
//! ```
//! use cerror::{Config, MatchMode};
//!
//! let config = Config::from_env()
//!     .match_mode(MatchMode::Prefix)
//!     .reject_prefix_collisions(true);
//! assert!(config.validate().is_ok());
//! ```
//!
//! The core operations take no configuration; only [`crate::Registry`]
//! consults it.

use std::fmt;

use crate::env::{env_get, env_get_bool};
use crate::predicate::MatchMode;

/// Library defaults.
pub mod defaults {
    use crate::predicate::MatchMode;

    pub const MATCH_MODE: MatchMode = MatchMode::Delimited;
    pub const REJECT_PREFIX_COLLISIONS: bool = false;
    pub const WARN_ON_COLLISION: bool = true;
}

/// Registry configuration with builder pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How `Registry::classify` matches errors against its categories
    pub match_mode: MatchMode,
    /// Refuse to define a name whose rendering prefixes, or is prefixed by,
    /// an existing one
    pub reject_prefix_collisions: bool,
    /// Log accepted prefix collisions at warn level
    pub warn_on_collision: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Config {
    /// Create config from library defaults with environment overrides.
    ///
    /// Environment variables (all optional):
    /// - `CERROR_MATCH_MODE` - `prefix` or `delimited` (alias `strict`)
    /// - `CERROR_REJECT_PREFIX_COLLISIONS` - Reject colliding names (0/1)
    /// - `CERROR_WARN_ON_COLLISION` - Warn on accepted collisions (0/1)
    pub fn from_env() -> Self {
        Self {
            match_mode: env_get("CERROR_MATCH_MODE", defaults::MATCH_MODE),
            reject_prefix_collisions: env_get_bool(
                "CERROR_REJECT_PREFIX_COLLISIONS",
                defaults::REJECT_PREFIX_COLLISIONS,
            ),
            warn_on_collision: env_get_bool(
                "CERROR_WARN_ON_COLLISION",
                defaults::WARN_ON_COLLISION,
            ),
        }
    }

    /// Create config with library defaults (no env override).
    pub fn new() -> Self {
        Self {
            match_mode: defaults::MATCH_MODE,
            reject_prefix_collisions: defaults::REJECT_PREFIX_COLLISIONS,
            warn_on_collision: defaults::WARN_ON_COLLISION,
        }
    }

    // Builder methods

    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn reject_prefix_collisions(mut self, reject: bool) -> Self {
        self.reject_prefix_collisions = reject;
        self
    }

    pub fn warn_on_collision(mut self, warn: bool) -> Self {
        self.warn_on_collision = warn;
        self
    }

    /// Validate configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.match_mode == MatchMode::Prefix && !self.reject_prefix_collisions {
            return Err(ConfigError::InvalidValue(
                "prefix match_mode requires reject_prefix_collisions",
            ));
        }
        Ok(())
    }
}

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
