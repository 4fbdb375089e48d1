//! Environment sources.
//!
//! Settings are read through [`EnvSource`] so that tests can hand the
//! loader an in-memory map instead of mutating the process environment.

use std::collections::HashMap;
use std::env::{self, VarError};
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Source of environment variables.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EnvSource: Send + Sync {
    /// Look up a variable.
    ///
    /// Returns `Ok(None)` when the variable is not set. A variable that is
    /// set to something that cannot be represented as a `String` is an error.
    fn var(&self, name: &str) -> ConfigResult<Option<String>>;
}

/// The host process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> ConfigResult<Option<String>> {
        match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::invalid_value(
                name,
                raw.to_string_lossy(),
                "value is not valid unicode",
            )),
        }
    }
}

/// In-memory environment, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> ConfigResult<Option<String>> {
        Ok(self.vars.get(name).cloned())
    }
}

/// Read a string variable, substituting `default` when it is unset.
///
/// An empty value counts as set.
pub(crate) fn string_or(source: &dyn EnvSource, name: &str, default: &str) -> ConfigResult<String> {
    match source.var(name)? {
        Some(value) => Ok(value),
        None => {
            tracing::debug!(variable = name, default, "Environment variable not set, using default");
            Ok(default.to_string())
        }
    }
}

/// Read and parse a variable, substituting `default` when it is unset.
///
/// Surrounding whitespace is ignored. A value that does not parse is an
/// [`ConfigError::InvalidConfigValue`]; there is no fallback to the default.
pub(crate) fn parsed_or<T>(source: &dyn EnvSource, name: &str, default: T) -> ConfigResult<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match source.var(name)? {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ConfigError::invalid_value(name, raw.as_str(), e)),
        None => {
            tracing::debug!(variable = name, %default, "Environment variable not set, using default");
            Ok(default)
        }
    }
}
