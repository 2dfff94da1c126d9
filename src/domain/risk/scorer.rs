//! 10-year CVD risk formula.
//!
//! The coefficients are fixed constants of the model, not fitted values from
//! a published cohort. They are reproduced as given.

use super::RiskResult;
use crate::domain::patient::PatientInput;

pub const AGE_COEFFICIENT: f64 = 0.06;
pub const MALE_COEFFICIENT: f64 = 0.4;
pub const SYSTOLIC_BP_COEFFICIENT: f64 = 0.02;
pub const TOTAL_CHOLESTEROL_COEFFICIENT: f64 = 0.3;
pub const HDL_COEFFICIENT: f64 = 0.2;
pub const SMOKER_COEFFICIENT: f64 = 0.5;
pub const DIABETES_COEFFICIENT: f64 = 0.5;

/// Offset subtracted from the linear predictor before exponentiation.
pub const LP_OFFSET: f64 = 6.0;

/// Baseline survival raised to the relative hazard.
pub const BASELINE_SURVIVAL: f64 = 0.9;

/// Stateless scorer for the 10-year risk model.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    /// Computes the rounded risk percentage for a patient.
    ///
    /// Total over all numeric inputs: no bounds checks are made and nothing
    /// is rejected.
    pub fn score(input: &PatientInput) -> RiskResult {
        RiskResult::from_fraction(Self::raw_risk(input))
    }

    /// Weighted sum of the risk factors.
    ///
    /// Terms are added left to right in the order below; changing the order
    /// changes the last bits of the result.
    pub fn linear_predictor(input: &PatientInput) -> f64 {
        let sex_flag = flag(input.sex.is_male());
        let smoker_flag = flag(input.is_smoker);
        let diabetes_flag = flag(input.has_diabetes);

        AGE_COEFFICIENT * f64::from(input.age)
            + MALE_COEFFICIENT * sex_flag
            + SYSTOLIC_BP_COEFFICIENT * f64::from(input.systolic_bp)
            + TOTAL_CHOLESTEROL_COEFFICIENT * input.total_cholesterol
            - HDL_COEFFICIENT * input.hdl
            + SMOKER_COEFFICIENT * smoker_flag
            + DIABETES_COEFFICIENT * diabetes_flag
    }

    /// Unrounded risk fraction: `1 - 0.9^(e^(lp - 6))`.
    pub fn raw_risk(input: &PatientInput) -> f64 {
        let lp = Self::linear_predictor(input);
        1.0 - BASELINE_SURVIVAL.powf((lp - LP_OFFSET).exp())
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}
