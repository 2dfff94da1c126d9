//! Cache adapters - memoization in front of the risk calculator.

mod memoized_calculator;

pub use memoized_calculator::{MemoizedRiskCalculator, DEFAULT_CACHE_CAPACITY};
