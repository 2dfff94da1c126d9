//! Report adapters - Implementations of the `ReportGenerator` port.
//!
//! - `PdfReportGenerator` - Single-page PDF built with a small in-crate writer
//! - `MarkdownReportGenerator` - The same content as Markdown text

mod markdown_report_generator;
mod pdf_document;
mod pdf_report_generator;

pub use markdown_report_generator::MarkdownReportGenerator;
pub use pdf_report_generator::PdfReportGenerator;
