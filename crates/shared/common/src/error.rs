//! Configuration error handling.
//!
//! A single failure mode exists: an environment variable is present but
//! cannot be turned into the type its setting expects. Loading stops at the
//! first such variable so the process never starts half-configured.

use thiserror::Error;

/// Configuration error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value \"{value}\" for {name}: {reason}")]
    InvalidConfigValue {
        /// Environment variable name
        name: String,
        /// Raw value as found in the environment (lossy for non-Unicode input)
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Get a stable error code for operators and scripts
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidConfigValue { .. } => "INVALID_CONFIG_VALUE",
        }
    }

    /// Name of the offending environment variable
    pub fn variable(&self) -> &str {
        match self {
            ConfigError::InvalidConfigValue { name, .. } => name,
        }
    }
}

/// Convenience constructors
impl ConfigError {
    pub fn invalid_value(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        ConfigError::InvalidConfigValue {
            name: name.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
