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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid founder identity: {0}")]
    InvalidFounder(String),

    #[error("Promotion approval threshold must be at least 1")]
    InvalidPromotionThreshold,

    #[error("Fixed participation quorum must require at least 1 vote")]
    InvalidQuorum,

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}
