//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RiskCalculator` - Computes a risk result for a patient
//! - `ReportGenerator` - Renders a patient report to document bytes

mod report_generator;
mod risk_calculator;

pub use report_generator::{ExportedDocument, ReportError, ReportFormat, ReportGenerator};
pub use risk_calculator::RiskCalculator;
