//! Configuration module
//!
//! Handles environment variables and their defaults.

pub mod constants;
mod inventory;
mod settings;
mod source;

pub use inventory::InventorySettings;
pub use settings::Settings;
pub use source::{EnvSource, MapEnv, ProcessEnv};

#[cfg(any(test, feature = "test-utils"))]
pub use source::MockEnvSource;
