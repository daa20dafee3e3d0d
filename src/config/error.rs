//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Connect timeout must be between 1 and 60 seconds")]
    InvalidConnectTimeout,

    #[error("Poll interval must be positive and no longer than the connect timeout")]
    InvalidPollInterval,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
