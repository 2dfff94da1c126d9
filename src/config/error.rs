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
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Font size must be between 6 and 72 points, got {0}")]
    InvalidFontSize(f64),

    #[error("Page margin must be between 0 and 50 mm, got {0}")]
    InvalidMargin(f64),

    #[error("Line height must be positive, got {0}")]
    InvalidLineHeight(f64),

    #[error("Report content does not fit on one page")]
    PageOverflow,

    #[error("Cache capacity must be positive when memoization is enabled")]
    InvalidCacheCapacity,

    #[error("Log level filter cannot be empty")]
    EmptyLogLevel,
}
