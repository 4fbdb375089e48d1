//! Command implementations.

pub mod check;
pub mod show;

use thiserror::Error;

use common::ConfigError;

/// Command failures.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type CommandResult<T> = Result<T, CommandError>;
