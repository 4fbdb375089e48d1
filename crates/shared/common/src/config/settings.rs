//! Application settings loaded from environment variables.

use serde::Serialize;

use super::constants::{
    DEFAULT_APP_PORT, DEFAULT_DATABASE_URL, DEFAULT_LOG_LEVEL, DEFAULT_REDIS_URL, ENV_APP_PORT,
    ENV_DATABASE_URL, ENV_LOG_LEVEL, ENV_REDIS_URL,
};
use super::source::{parsed_or, string_or, EnvSource, ProcessEnv};
use crate::error::ConfigResult;

/// Application settings.
///
/// Immutable once built. Load it once at process start and share it as
/// `Arc<Settings>` with whatever needs configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    app_port: u16,
    database_url: String,
    redis_url: String,
    log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_port: DEFAULT_APP_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            redis_url: DEFAULT_REDIS_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// Build settings directly, bypassing the environment.
    pub fn new(
        app_port: u16,
        database_url: impl Into<String>,
        redis_url: impl Into<String>,
        log_level: impl Into<String>,
    ) -> Self {
        Self {
            app_port,
            database_url: database_url.into(),
            redis_url: redis_url.into(),
            log_level: log_level.into(),
        }
    }

    /// Load settings from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidConfigValue`](crate::ConfigError) if
    /// `APP_PORT` is set but is not a valid port number.
    pub fn load() -> ConfigResult<Self> {
        Self::from_source(&ProcessEnv)
    }

    /// Load settings from an arbitrary environment source.
    pub fn from_source(source: &dyn EnvSource) -> ConfigResult<Self> {
        Ok(Self {
            app_port: parsed_or(source, ENV_APP_PORT, DEFAULT_APP_PORT)?,
            database_url: string_or(source, ENV_DATABASE_URL, DEFAULT_DATABASE_URL)?,
            redis_url: string_or(source, ENV_REDIS_URL, DEFAULT_REDIS_URL)?,
            log_level: string_or(source, ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL)?,
        })
    }

    pub fn app_port(&self) -> u16 {
        self.app_port
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn redis_url(&self) -> &str {
        &self.redis_url
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Names of connection URLs that are empty.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.database_url.is_empty() {
            missing.push(ENV_DATABASE_URL);
        }
        if self.redis_url.is_empty() {
            missing.push(ENV_REDIS_URL);
        }
        missing
    }

    /// Log a warning for each connection URL that is empty.
    pub fn warn_missing(&self) {
        for name in self.missing() {
            tracing::warn!(variable = name, "Connection URL not configured");
        }
    }
}
