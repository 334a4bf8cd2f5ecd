//! World errors

use agora_ports::{ConfigError, EnvironmentError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorldError {
    #[error("Market environment not initialized")]
    NotInitialized,

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Environment error: {0}")]
    Environment(#[from] EnvironmentError),
}

pub type Result<T> = std::result::Result<T, WorldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_initialized_names_environment() {
        let msg = WorldError::NotInitialized.to_string();
        assert!(msg.contains("Market environment"));
    }

    #[test]
    fn test_wraps_environment_error_unchanged() {
        let inner = EnvironmentError::InvalidAction("3 actions for 2 tickers".to_string());
        let err: WorldError = inner.clone().into();

        match err {
            WorldError::Environment(e) => assert_eq!(e, inner),
            other => panic!("unexpected {:?}", other),
        }
    }
}
