//! Report Generator Port - renders a patient risk report to document bytes.
//!
//! The application depends on this trait, while adapters (like
//! `PdfReportGenerator`) provide the rendering. Swapping the rendering
//! library never touches the scorer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::report::ReportFields;

/// Port for rendering a report from its fields.
///
/// # Contract
///
/// Implementations must:
/// - Produce a single-page document with the title, patient name, age, sex
///   and risk percentage, and nothing else visible
/// - Return non-empty bytes for any field values
/// - Report clear errors for rendering failures
///
/// # Usage
///
/// ```rust,ignore
/// let generator: &dyn ReportGenerator = get_generator();
/// let bytes = generator.generate(&fields).await?;
/// ```
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Render the report.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if rendering fails.
    async fn generate(&self, fields: &ReportFields) -> Result<Vec<u8>, ReportError>;

    /// The format this generator produces.
    fn format(&self) -> ReportFormat;
}

/// Report formats supported by the adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// PDF document.
    Pdf,
    /// Markdown text.
    Markdown,
}

impl ReportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Pdf => write!(f, "pdf"),
            ReportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ReportFormat::Pdf),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            _ => Err(ReportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Rendered report with download metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// The rendered content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ReportFormat,
}

impl ExportedDocument {
    /// Create a new exported document.
    pub fn new(content: Vec<u8>, format: ReportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }
}

/// Errors that can occur while rendering a report.
#[derive(Debug, Clone, Error)]
pub enum ReportError {
    /// Unsupported report format requested.
    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    /// The renderer failed to lay out or serialise the document.
    #[error("Report rendering failed: {0}")]
    RenderFailed(String),
}

impl ReportError {
    /// Create a rendering error.
    pub fn render_failed(reason: impl Into<String>) -> Self {
        Self::RenderFailed(reason.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
