//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Values come from built-in defaults, an optional
//! TOML file, and environment variables with the `CVD_RISK` prefix, in that
//! order of precedence (later wins). Nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use cvd_risk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reports use {:?} paper", config.report.page_size);
//! ```

mod error;
mod logging;
mod report;
mod scoring;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig, TelemetryError};
pub use report::{PageSize, ReportConfig};
pub use scoring::ScoringConfig;

use std::path::Path;

use serde::Deserialize;

/// Prefix of environment variables read by [`AppConfig::load`].
pub const ENV_PREFIX: &str = "CVD_RISK";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Report layout (paper, margins, fonts)
    #[serde(default)]
    pub report: ReportConfig,

    /// Risk calculation (memoization)
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Logging (level filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CVD_RISK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to defaults for anything unset
    ///
    /// # Environment Variable Format
    ///
    /// - `CVD_RISK__REPORT__PAGE_SIZE=letter` -> `report.page_size = letter`
    /// - `CVD_RISK__SCORING__MEMOIZE=false` -> `scoring.memoize = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a TOML file, with environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or values
    /// cannot be parsed into expected types.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(true))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    fn environment() -> config::Environment {
        config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator("__")
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.report.validate()?;
        self.scoring.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "CVD_RISK__REPORT__PAGE_SIZE",
        "CVD_RISK__REPORT__MARGIN_MM",
        "CVD_RISK__SCORING__MEMOIZE",
        "CVD_RISK__SCORING__CACHE_CAPACITY",
        "CVD_RISK__LOGGING__FORMAT",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for key in ENV_KEYS {
            env::remove_var(key);
        }
    }

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.report, ReportConfig::default());
        assert_eq!(config.scoring, ScoringConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CVD_RISK__REPORT__PAGE_SIZE", "letter");
        env::set_var("CVD_RISK__SCORING__MEMOIZE", "false");
        env::set_var("CVD_RISK__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.report.page_size, PageSize::Letter);
        assert!(!config.scoring.memoize);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = write_toml(
            r#"
[report]
page_size = "letter"
margin_mm = 15.0

[scoring]
cache_capacity = 64
"#,
        );

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.report.page_size, PageSize::Letter);
        assert_eq!(config.report.margin_mm, 15.0);
        assert_eq!(config.report.line_height_mm, 10.0);
        assert_eq!(config.scoring.cache_capacity, 64);
        assert!(config.scoring.memoize);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let file = write_toml("[scoring]\ncache_capacity = 64\n");
        env::set_var("CVD_RISK__SCORING__CACHE_CAPACITY", "8");
        let result = AppConfig::load_from(file.path());
        clear_env();

        assert_eq!(result.unwrap().scoring.cache_capacity, 8);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = AppConfig::load_from("/nonexistent/cvd-risk.toml");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_unknown_page_size_is_an_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CVD_RISK__REPORT__PAGE_SIZE", "tabloid");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn test_validate_reports_first_invalid_section() {
        let config = AppConfig {
            scoring: ScoringConfig {
                memoize: true,
                cache_capacity: 0,
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCacheCapacity));
    }
}
