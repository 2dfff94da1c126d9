//! Risk module - the scoring formula and its output.

mod result;
mod scorer;

pub use result::{round_one_decimal, RiskResult};
pub use scorer::{
    RiskScorer, AGE_COEFFICIENT, BASELINE_SURVIVAL, DIABETES_COEFFICIENT, HDL_COEFFICIENT,
    LP_OFFSET, MALE_COEFFICIENT, SMOKER_COEFFICIENT, SYSTOLIC_BP_COEFFICIENT,
    TOTAL_CHOLESTEROL_COEFFICIENT,
};
