//! GenerateReportHandler - Command handler for exporting a patient report.
//!
//! Looks up the generator registered for the requested format, renders the
//! report and attaches the download filename and content type.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::adapters::{MarkdownReportGenerator, PdfReportGenerator};
use crate::config::ReportConfig;
use crate::domain::foundation::Timestamp;
use crate::domain::patient::Sex;
use crate::domain::report::ReportFields;
use crate::domain::risk::RiskResult;
use crate::ports::{ExportedDocument, ReportError, ReportFormat, ReportGenerator};

/// Command to generate a report.
#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    pub patient_name: String,
    pub age: i32,
    pub sex: Sex,
    pub risk: RiskResult,
    pub format: ReportFormat,
}

impl GenerateReportCommand {
    /// Command for the PDF download.
    pub fn pdf(patient_name: impl Into<String>, age: i32, sex: Sex, risk: RiskResult) -> Self {
        Self {
            patient_name: patient_name.into(),
            age,
            sex,
            risk,
            format: ReportFormat::Pdf,
        }
    }

    /// Same command with a different output format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

/// Errors from report generation.
#[derive(Debug, Clone, Error)]
pub enum GenerateReportError {
    #[error("No report generator registered for format '{0}'")]
    UnsupportedFormat(ReportFormat),

    #[error("Report generation failed: {0}")]
    GenerationFailed(#[from] ReportError),
}

/// Handler for generating reports.
pub struct GenerateReportHandler {
    generators: HashMap<ReportFormat, Arc<dyn ReportGenerator>>,
}

impl GenerateReportHandler {
    /// Creates a handler from a set of generators. A later generator for the
    /// same format replaces an earlier one.
    pub fn new(generators: impl IntoIterator<Item = Arc<dyn ReportGenerator>>) -> Self {
        let generators = generators
            .into_iter()
            .map(|generator| (generator.format(), generator))
            .collect();
        Self { generators }
    }

    /// Registers the PDF and Markdown generators.
    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new([
            Arc::new(PdfReportGenerator::from_config(config)) as Arc<dyn ReportGenerator>,
            Arc::new(MarkdownReportGenerator::new()),
        ])
    }

    /// Whether a generator is registered for `format`.
    pub fn supports(&self, format: ReportFormat) -> bool {
        self.generators.contains_key(&format)
    }

    pub async fn handle(
        &self,
        cmd: GenerateReportCommand,
    ) -> Result<ExportedDocument, GenerateReportError> {
        self.handle_at(cmd, Timestamp::now()).await
    }

    /// Generates the report with an explicit creation time.
    pub async fn handle_at(
        &self,
        cmd: GenerateReportCommand,
        generated_at: Timestamp,
    ) -> Result<ExportedDocument, GenerateReportError> {
        let generator = self
            .generators
            .get(&cmd.format)
            .ok_or(GenerateReportError::UnsupportedFormat(cmd.format))?;

        let fields = ReportFields::new(cmd.patient_name, cmd.age, cmd.sex, cmd.risk)
            .with_generated_at(generated_at);

        let content = generator.generate(&fields).await.map_err(|e| {
            warn!(format = %cmd.format, error = %e, "Report generation failed");
            GenerateReportError::from(e)
        })?;

        let document = ExportedDocument::new(content, cmd.format, &fields.base_filename());
        info!(
            format = %document.format,
            filename = %document.filename,
            bytes = document.content.len(),
            "Generated patient report"
        );

        Ok(document)
    }
}
