//! Common utilities shared by every service process.
//!
//! This crate provides:
//! - Settings loaded once from the process environment
//! - The configuration error type
//! - Log filter construction from the configured level

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{EnvSource, InventorySettings, MapEnv, ProcessEnv, Settings};
pub use error::{ConfigError, ConfigResult};
