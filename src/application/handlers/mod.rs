//! Command handlers.
//!
//! - `risk` - Scoring a patient
//! - `report` - Exporting the report document

pub mod report;
pub mod risk;

pub use report::{GenerateReportCommand, GenerateReportError, GenerateReportHandler};
pub use risk::{CalculateRiskCommand, CalculateRiskHandler, CalculateRiskResult};
