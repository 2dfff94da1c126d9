//! Report module - content of the printable patient report.

mod fields;

pub use fields::{ReportFields, REPORT_TITLE, UNKNOWN_PATIENT};
