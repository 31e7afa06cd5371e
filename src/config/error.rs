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

    #[error("Invalid Telegram bot token format")]
    InvalidBotToken,

    #[error("Invalid API host")]
    InvalidApiHost,

    #[error("Invalid API base URL")]
    InvalidBaseUrl,

    #[error("Invalid request timeout (must be 1-300 seconds)")]
    InvalidTimeout,

    #[error("Invalid page limit (must be at least 1)")]
    InvalidMaxPages,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
