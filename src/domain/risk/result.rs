//! Risk result value object (percentage with one decimal digit).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Estimated 10-year CVD risk as a percentage rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskResult {
    percentage: f64,
}

impl RiskResult {
    /// Builds a result from a risk fraction (0.0 to 1.0).
    pub fn from_fraction(risk: f64) -> Self {
        Self {
            percentage: round_one_decimal(risk * 100.0),
        }
    }

    /// Wraps an already rounded percentage, e.g. one read back from a form.
    pub fn from_percentage(percentage: f64) -> Self {
        Self {
            percentage: round_one_decimal(percentage),
        }
    }

    /// Returns the percentage value.
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.percentage / 100.0
    }
}

impl fmt::Display for RiskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percentage)
    }
}

/// Rounds the exact binary value of `value` to one decimal place and returns
/// the nearest double to that decimal.
///
/// Scaling by ten first would round values such as 0.35 (stored as
/// 0.34999...) the wrong way.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
