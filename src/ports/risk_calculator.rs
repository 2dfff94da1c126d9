//! Risk Calculator Port - seam between callers and the scoring formula.
//!
//! The domain `RiskScorer` implements this directly. Adapters (like
//! `MemoizedRiskCalculator`) wrap another calculator without changing results.

use crate::domain::patient::PatientInput;
use crate::domain::risk::{RiskResult, RiskScorer};

/// Port for computing the 10-year CVD risk of a patient.
///
/// # Contract
///
/// Implementations must:
/// - Return exactly what [`RiskScorer::score`] returns for the same input
/// - Never fail and never reject numeric input
/// - Be callable concurrently from multiple threads
pub trait RiskCalculator: Send + Sync {
    /// Calculate the rounded risk percentage for a patient.
    fn calculate(&self, input: &PatientInput) -> RiskResult;
}

impl RiskCalculator for RiskScorer {
    fn calculate(&self, input: &PatientInput) -> RiskResult {
        RiskScorer::score(input)
    }
}
