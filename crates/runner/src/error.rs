//! Runner errors

use agora_ports::ConfigError;
use agora_world::WorldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("World error: {0}")]
    World(#[from] WorldError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
