//! Fields printed on a patient risk report.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::patient::Sex;
use crate::domain::risk::RiskResult;

/// Heading of every report.
pub const REPORT_TITLE: &str = "CVD Risk Report";

/// Name printed when the form was submitted without one.
pub const UNKNOWN_PATIENT: &str = "Unknown";

/// Everything a report renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFields {
    /// Name as entered on the form, possibly empty.
    pub patient_name: String,
    pub age: i32,
    pub sex: Sex,
    pub risk: RiskResult,
    /// Document metadata only; never printed on the page.
    #[serde(default)]
    pub generated_at: Timestamp,
}

impl ReportFields {
    /// Number of lines [`ReportFields::body_lines`] returns.
    pub const BODY_LINE_COUNT: usize = 3;

    pub fn new(patient_name: impl Into<String>, age: i32, sex: Sex, risk: RiskResult) -> Self {
        Self {
            patient_name: patient_name.into(),
            age,
            sex,
            risk,
            generated_at: Timestamp::now(),
        }
    }

    /// Pins the generation time, for reproducible output.
    pub fn with_generated_at(mut self, generated_at: Timestamp) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Name to print, falling back to [`UNKNOWN_PATIENT`] for blank input.
    pub fn display_name(&self) -> &str {
        let trimmed = self.patient_name.trim();
        if trimmed.is_empty() {
            UNKNOWN_PATIENT
        } else {
            trimmed
        }
    }

    /// Download file name without extension: `<name>_cvd_report`.
    ///
    /// Uses the name as entered. Path separators are replaced so the
    /// result is always a single path component.
    pub fn base_filename(&self) -> String {
        let name: String = self
            .patient_name
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        format!("{}_cvd_report", name)
    }

    /// Body lines under the title, in print order.
    pub fn body_lines(&self) -> Vec<String> {
        vec![
            format!("Patient Name: {}", self.display_name()),
            format!("Age: {}    Sex: {}", self.age, self.sex),
            format!("Estimated 10-Year Risk: {:.1}%", self.risk.percentage()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ReportFields {
        ReportFields::new("Jane Doe", 50, Sex::Male, RiskResult::from_percentage(32.2))
    }

    #[test]
    fn body_lines_follow_print_order() {
        assert_eq!(
            jane().body_lines(),
            vec![
                "Patient Name: Jane Doe".to_string(),
                "Age: 50    Sex: Male".to_string(),
                "Estimated 10-Year Risk: 32.2%".to_string(),
            ]
        );
    }

    #[test]
    fn whole_percentages_keep_one_decimal() {
        let fields = ReportFields::new("A", 40, Sex::Female, RiskResult::from_percentage(64.0));
        assert_eq!(fields.body_lines()[2], "Estimated 10-Year Risk: 64.0%");
    }

    #[test]
    fn blank_name_displays_unknown() {
        let fields = ReportFields::new("   ", 50, Sex::Male, RiskResult::from_percentage(1.0));
        assert_eq!(fields.display_name(), "Unknown");
        assert_eq!(fields.body_lines()[0], "Patient Name: Unknown");
    }

    #[test]
    fn base_filename_uses_entered_name() {
        assert_eq!(jane().base_filename(), "Jane Doe_cvd_report");

        let blank = ReportFields::new("", 50, Sex::Male, RiskResult::from_percentage(1.0));
        assert_eq!(blank.base_filename(), "_cvd_report");
    }

    #[test]
    fn base_filename_strips_path_separators() {
        let fields = ReportFields::new("../etc/x", 50, Sex::Male, RiskResult::from_percentage(1.0));
        assert_eq!(fields.base_filename(), ".._etc_x_cvd_report");
    }

    #[test]
    fn with_generated_at_pins_time() {
        let ts = Timestamp::parse_rfc3339("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(jane().with_generated_at(ts).generated_at, ts);
    }
}
