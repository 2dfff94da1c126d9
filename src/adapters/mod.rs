//! Adapters - Implementations of port interfaces.
//!
//! - `cache` - Memoizing risk calculator
//! - `report` - PDF and Markdown report generators

pub mod cache;
pub mod report;

pub use cache::{MemoizedRiskCalculator, DEFAULT_CACHE_CAPACITY};
pub use report::{MarkdownReportGenerator, PdfReportGenerator};
