//! Logging configuration and initialization.

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

use super::error::ValidationError;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG` when set
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("Tracing subscriber already initialised: {0}")]
    AlreadyInitialised(String),
}

impl LoggingConfig {
    /// Builds the filter: `RUST_LOG` first, then the configured level.
    pub fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        EnvFilter::try_from_default_env().or_else(|_| {
            EnvFilter::try_new(&self.level).map_err(|e| TelemetryError::InvalidFilter {
                directive: self.level.clone(),
                reason: e.to_string(),
            })
        })
    }

    /// Installs the global tracing subscriber.
    ///
    /// Fails instead of panicking when a subscriber is already set, so
    /// embedding applications and tests can call it more than once.
    pub fn init(&self) -> Result<(), TelemetryError> {
        let filter = self.env_filter()?;

        let result = match self.format {
            LogFormat::Json => fmt().json().with_env_filter(filter).try_init(),
            LogFormat::Pretty => fmt().with_env_filter(filter).try_init(),
        };

        result.map_err(|e| TelemetryError::AlreadyInitialised(e.to_string()))
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info,cvd_risk=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info,cvd_risk=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_configured_level_builds_filter() {
        let config = LoggingConfig {
            level: "warn,cvd_risk=trace".to_string(),
            ..Default::default()
        };
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn test_empty_level_rejected() {
        let config = LoggingConfig {
            level: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyLogLevel));
    }

    #[test]
    fn test_second_init_reports_error() {
        let config = LoggingConfig::default();
        let _ = config.init();
        assert!(matches!(
            config.init(),
            Err(TelemetryError::AlreadyInitialised(_))
        ));
    }
}
