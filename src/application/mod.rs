//! Application layer - command handlers the presentation layer calls.
//!
//! Handlers wire ports to adapters and contain no rendering or scoring
//! logic of their own.

pub mod handlers;

pub use handlers::{
    CalculateRiskCommand, CalculateRiskHandler, CalculateRiskResult, GenerateReportCommand,
    GenerateReportError, GenerateReportHandler,
};
