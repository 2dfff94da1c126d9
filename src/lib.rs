//! CVD Risk - Cardiovascular disease 10-year risk scoring
//!
//! This crate scores a patient's 10-year cardiovascular risk from a handful
//! of vitals and exports the result as a printable single-page report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
