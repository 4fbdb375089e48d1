//! Inventory service settings.
//!
//! The inventory service never validates its configuration: an empty URL
//! means the corresponding feature is disabled and a warning is logged.

use serde::Serialize;

use super::constants::{
    DEFAULT_EVENT_STORE_URL, DEFAULT_MONGO_URL, ENV_EVENT_STORE_URL, ENV_MONGO_URL,
    INVENTORY_SERVER_PORT,
};
use super::source::{string_or, EnvSource, ProcessEnv};
use crate::error::ConfigResult;

/// Inventory service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySettings {
    server_port: u16,
    mongo_url: String,
    /// Redis URL; used only to consume the order event queue shared with
    /// the orders service
    event_store_url: String,
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            server_port: INVENTORY_SERVER_PORT,
            mongo_url: DEFAULT_MONGO_URL.to_string(),
            event_store_url: DEFAULT_EVENT_STORE_URL.to_string(),
        }
    }
}

impl InventorySettings {
    pub fn new(mongo_url: impl Into<String>, event_store_url: impl Into<String>) -> Self {
        Self {
            server_port: INVENTORY_SERVER_PORT,
            mongo_url: mongo_url.into(),
            event_store_url: event_store_url.into(),
        }
    }

    /// Load settings from the process environment.
    pub fn load() -> ConfigResult<Self> {
        Self::from_source(&ProcessEnv)
    }

    /// Load settings from an arbitrary environment source.
    pub fn from_source(source: &dyn EnvSource) -> ConfigResult<Self> {
        Ok(Self {
            server_port: INVENTORY_SERVER_PORT,
            mongo_url: string_or(source, ENV_MONGO_URL, DEFAULT_MONGO_URL)?,
            event_store_url: string_or(source, ENV_EVENT_STORE_URL, DEFAULT_EVENT_STORE_URL)?,
        })
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn mongo_url(&self) -> &str {
        &self.mongo_url
    }

    pub fn event_store_url(&self) -> &str {
        &self.event_store_url
    }

    /// Names of connection URLs that are empty.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.mongo_url.is_empty() {
            missing.push(ENV_MONGO_URL);
        }
        if self.event_store_url.is_empty() {
            missing.push(ENV_EVENT_STORE_URL);
        }
        missing
    }

    /// Log a warning for each connection URL that is empty.
    pub fn warn_missing(&self) {
        for name in self.missing() {
            tracing::warn!(variable = name, "Inventory connection URL not configured, feature disabled");
        }
    }
}
