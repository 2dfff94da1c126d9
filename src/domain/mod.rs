//! Domain layer containing the risk model and its value objects.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, errors)
//! - `patient` - Patient attributes collected by the intake form
//! - `risk` - The 10-year CVD risk formula and its result type
//! - `report` - Content of the printable patient report

pub mod foundation;
pub mod patient;
pub mod report;
pub mod risk;
