//! CalculateRiskHandler - Command handler for scoring a patient.
//!
//! Runs the configured risk calculator and phrases the result the way the
//! intake form shows it. Inputs outside the form bounds are still scored;
//! the violations are returned alongside so the caller can flag them.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::adapters::MemoizedRiskCalculator;
use crate::config::ScoringConfig;
use crate::domain::foundation::ValidationError;
use crate::domain::patient::{InputBounds, PatientInput};
use crate::domain::risk::{RiskResult, RiskScorer};
use crate::ports::RiskCalculator;

/// Command to calculate the 10-year risk of one patient.
#[derive(Debug, Clone)]
pub struct CalculateRiskCommand {
    pub patient: PatientInput,
}

/// Result of a risk calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculateRiskResult {
    /// Rounded risk percentage.
    pub risk: RiskResult,
    /// Text shown to the user, e.g. `Estimated 10-Year CVD Risk: 31.0%`.
    pub message: String,
    /// Form bounds the input violates. Empty for normal form input.
    pub bounds_warnings: Vec<ValidationError>,
}

/// Handler for risk calculations.
pub struct CalculateRiskHandler {
    calculator: Arc<dyn RiskCalculator>,
    bounds: InputBounds,
}

impl CalculateRiskHandler {
    pub fn new(calculator: Arc<dyn RiskCalculator>) -> Self {
        Self {
            calculator,
            bounds: InputBounds::FORM,
        }
    }

    /// Wires the scorer, wrapped in a cache when memoization is enabled.
    pub fn from_config(config: &ScoringConfig) -> Self {
        let scorer: Arc<dyn RiskCalculator> = Arc::new(RiskScorer);
        let calculator: Arc<dyn RiskCalculator> = if config.memoize {
            Arc::new(MemoizedRiskCalculator::new(scorer, config.cache_capacity))
        } else {
            scorer
        };
        Self::new(calculator)
    }

    /// Replaces the bounds used for warnings.
    pub fn with_bounds(mut self, bounds: InputBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn handle(&self, cmd: CalculateRiskCommand) -> CalculateRiskResult {
        let bounds_warnings = self.bounds.check(&cmd.patient).err().unwrap_or_default();
        for warning in &bounds_warnings {
            warn!(field = warning.field(), "Patient input outside form bounds: {}", warning);
        }

        let risk = self.calculator.calculate(&cmd.patient);
        debug!(risk = risk.percentage(), "Calculated 10-year CVD risk");

        CalculateRiskResult {
            risk,
            message: format!("Estimated 10-Year CVD Risk: {}", risk),
            bounds_warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::Sex;

    fn handler() -> CalculateRiskHandler {
        CalculateRiskHandler::from_config(&ScoringConfig::default())
    }

    #[test]
    fn scores_reference_patient() {
        let result = handler().handle(CalculateRiskCommand {
            patient: PatientInput::default(),
        });

        assert_eq!(result.risk.percentage(), 31.0);
        assert_eq!(result.message, "Estimated 10-Year CVD Risk: 31.0%");
        assert!(result.bounds_warnings.is_empty());
    }

    #[test]
    fn scores_smoker_with_diabetes() {
        let result = handler().handle(CalculateRiskCommand {
            patient: PatientInput::default().with_smoker(true).with_diabetes(true),
        });

        assert_eq!(result.message, "Estimated 10-Year CVD Risk: 63.6%");
    }

    #[test]
    fn out_of_bounds_input_is_scored_with_warnings() {
        let patient = PatientInput {
            age: 18,
            sex: Sex::Female,
            ..PatientInput::default()
        };
        let result = handler().handle(CalculateRiskCommand { patient });

        assert_eq!(result.risk, RiskScorer::score(&patient));
        assert_eq!(result.bounds_warnings.len(), 1);
        assert_eq!(result.bounds_warnings[0].field(), "age");
    }

    #[test]
    fn memoized_and_plain_wiring_agree() {
        let plain = CalculateRiskHandler::from_config(&ScoringConfig {
            memoize: false,
            cache_capacity: 0,
        });
        let cached = handler();
        let cmd = CalculateRiskCommand {
            patient: PatientInput::default().with_smoker(true),
        };

        assert_eq!(plain.handle(cmd.clone()), cached.handle(cmd.clone()));
        assert_eq!(cached.handle(cmd.clone()), cached.handle(cmd));
    }

    #[test]
    fn custom_bounds_change_warnings_only() {
        let strict = InputBounds {
            age: crate::domain::patient::FieldBounds::new(40.0, 45.0, 42.0),
            ..InputBounds::FORM
        };
        let result = handler().with_bounds(strict).handle(CalculateRiskCommand {
            patient: PatientInput::default(),
        });

        assert_eq!(result.risk.percentage(), 31.0);
        assert_eq!(result.bounds_warnings.len(), 1);
    }
}
