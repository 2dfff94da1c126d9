//! Risk handlers.

mod calculate_risk;

pub use calculate_risk::{CalculateRiskCommand, CalculateRiskHandler, CalculateRiskResult};
