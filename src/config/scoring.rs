//! Risk scoring configuration

use serde::Deserialize;

use super::error::ValidationError;

/// How risk calculations are served.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Cache results per distinct patient input
    #[serde(default = "default_memoize")]
    pub memoize: bool,

    /// Maximum number of cached inputs
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.memoize && self.cache_capacity == 0 {
            return Err(ValidationError::InvalidCacheCapacity);
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            memoize: default_memoize(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_memoize() -> bool {
    true
}

fn default_cache_capacity() -> usize {
    crate::adapters::DEFAULT_CACHE_CAPACITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_config_defaults() {
        let config = ScoringConfig::default();
        assert!(config.memoize);
        assert_eq!(config.cache_capacity, 1024);
    }

    #[test]
    fn test_zero_capacity_rejected_only_when_memoizing() {
        let config = ScoringConfig {
            memoize: true,
            cache_capacity: 0,
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCacheCapacity));

        let config = ScoringConfig {
            memoize: false,
            cache_capacity: 0,
        };
        assert!(config.validate().is_ok());
    }
}
