//! Patient attributes fed to the risk formula, and the bounds the intake
//! form places on them.

use serde::{Deserialize, Serialize};

use super::Sex;
use crate::domain::foundation::ValidationError;

/// Attributes of one patient for a single risk calculation.
///
/// No invariants are enforced here: the scorer accepts any numeric value.
/// Use [`InputBounds::check`] where form-level limits matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    /// Age in years.
    pub age: i32,
    pub sex: Sex,
    /// Systolic blood pressure in mmHg.
    pub systolic_bp: i32,
    /// Total cholesterol in mmol/L.
    pub total_cholesterol: f64,
    /// HDL cholesterol in mmol/L.
    pub hdl: f64,
    pub is_smoker: bool,
    pub has_diabetes: bool,
}

impl PatientInput {
    /// Sets the smoking flag.
    pub fn with_smoker(mut self, is_smoker: bool) -> Self {
        self.is_smoker = is_smoker;
        self
    }

    /// Sets the diabetes flag.
    pub fn with_diabetes(mut self, has_diabetes: bool) -> Self {
        self.has_diabetes = has_diabetes;
        self
    }
}

impl Default for PatientInput {
    /// The intake form as first shown.
    fn default() -> Self {
        let bounds = InputBounds::FORM;
        Self {
            age: bounds.age.default as i32,
            sex: Sex::Male,
            systolic_bp: bounds.systolic_bp.default as i32,
            total_cholesterol: bounds.total_cholesterol.default,
            hdl: bounds.hdl.default,
            is_smoker: false,
            has_diabetes: false,
        }
    }
}

/// Inclusive limits and initial value of one numeric form field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl FieldBounds {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    /// True when `value` lies within `[min, max]`. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, field: &str, value: f64) -> Result<(), ValidationError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::out_of_range(field, self.min, self.max, value))
        }
    }
}

/// Limits the intake widgets enforce before a calculation is requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    pub age: FieldBounds,
    pub systolic_bp: FieldBounds,
    pub total_cholesterol: FieldBounds,
    pub hdl: FieldBounds,
}

impl InputBounds {
    /// Bounds of the standard intake form.
    pub const FORM: Self = Self {
        age: FieldBounds::new(30.0, 100.0, 50.0),
        systolic_bp: FieldBounds::new(90.0, 200.0, 130.0),
        total_cholesterol: FieldBounds::new(2.0, 10.0, 5.0),
        hdl: FieldBounds::new(0.5, 3.0, 1.2),
    };

    /// Checks every bounded field, collecting all violations.
    pub fn check(&self, input: &PatientInput) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = [
            self.age.check("age", f64::from(input.age)),
            self.systolic_bp.check("systolic_bp", f64::from(input.systolic_bp)),
            self.total_cholesterol
                .check("total_cholesterol", input.total_cholesterol),
            self.hdl.check("hdl", input.hdl),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for InputBounds {
    fn default() -> Self {
        Self::FORM
    }
}
