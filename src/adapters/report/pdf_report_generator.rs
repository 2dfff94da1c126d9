//! PDF report adapter.
//!
//! Lays out the report on a single page: a bold centred title followed by
//! one left-aligned cell per field, each cell one line tall. Uses the
//! standard Helvetica faces so the output has no embedded font data.
//!
//! # Architecture
//!
//! This adapter implements the `ReportGenerator` port from the hexagonal
//! architecture. The application depends on the port trait only.

use async_trait::async_trait;
use tracing::debug;

use super::pdf_document::{literal_string, ContentStream, PdfWriter, StandardFont, PT_PER_MM};
use crate::config::{PageSize, ReportConfig};
use crate::domain::report::{ReportFields, REPORT_TITLE};
use crate::ports::{ReportError, ReportFormat, ReportGenerator};

/// Producer string written to the document info dictionary.
const PRODUCER: &str = concat!("cvd-risk ", env!("CARGO_PKG_VERSION"));

/// Fraction of the font size between the cell centre line and the baseline.
const BASELINE_SHIFT: f64 = 0.3;

/// Report generator producing a single-page PDF 1.4 document.
///
/// # Example
///
/// ```rust,ignore
/// let generator = PdfReportGenerator::new();
/// let pdf = generator.generate(&fields).await?;
/// assert!(pdf.starts_with(b"%PDF-1.4"));
/// ```
#[derive(Debug, Clone)]
pub struct PdfReportGenerator {
    page_size: PageSize,
    margin_mm: f64,
    line_height_mm: f64,
    title_font_size: f64,
    body_font_size: f64,
}

impl PdfReportGenerator {
    /// Create a generator with the default A4 layout.
    pub fn new() -> Self {
        Self::from_config(&ReportConfig::default())
    }

    /// Create a generator from report configuration.
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            page_size: config.page_size,
            margin_mm: config.margin_mm,
            line_height_mm: config.line_height_mm,
            title_font_size: config.title_font_size,
            body_font_size: config.body_font_size,
        }
    }

    /// Set the paper size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Rejects layouts that would place text off the page or emit
    /// non-numeric coordinates.
    fn check_layout(&self) -> Result<(), ReportError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.title_font_size) || !positive(self.body_font_size) {
            return Err(ReportError::render_failed("font size must be positive"));
        }
        let margin_ok = self.margin_mm.is_finite() && self.margin_mm >= 0.0;
        if !positive(self.line_height_mm) || !margin_ok {
            return Err(ReportError::render_failed("margin and line height must be finite"));
        }

        let (_, page_height) = self.page_size.dimensions_pt();
        let lines = (1 + ReportFields::BODY_LINE_COUNT) as f64;
        let used = (2.0 * self.margin_mm + lines * self.line_height_mm) * PT_PER_MM;
        if used > page_height {
            return Err(ReportError::render_failed("report does not fit on one page"));
        }
        Ok(())
    }

    /// Lays out the page content in PDF user space (origin bottom left).
    fn render_content(&self, fields: &ReportFields) -> Vec<u8> {
        let (page_width, page_height) = self.page_size.dimensions_pt();
        let margin = self.margin_mm * PT_PER_MM;
        let line_height = self.line_height_mm * PT_PER_MM;
        let cell_width = page_width - 2.0 * margin;
        let cell_padding = margin / 10.0;

        let baseline = |line: usize, font_size: f64| {
            let cell_top = margin + line as f64 * line_height;
            page_height - (cell_top + line_height / 2.0 + BASELINE_SHIFT * font_size)
        };

        let mut content = ContentStream::new();

        let title_font = StandardFont::HelveticaBold;
        let title_width = title_font.text_width(REPORT_TITLE, self.title_font_size);
        content.text(
            "F2",
            self.title_font_size,
            margin + (cell_width - title_width) / 2.0,
            baseline(0, self.title_font_size),
            REPORT_TITLE,
        );

        for (index, line) in fields.body_lines().iter().enumerate() {
            content.text(
                "F1",
                self.body_font_size,
                margin + cell_padding,
                baseline(index + 1, self.body_font_size),
                line,
            );
        }

        content.into_bytes()
    }

    fn render(&self, fields: &ReportFields) -> Vec<u8> {
        let (page_width, page_height) = self.page_size.dimensions_pt();
        let mut writer = PdfWriter::new();

        let catalog = writer.reserve();
        let pages = writer.reserve();
        let page = writer.reserve();
        let regular = writer.add(StandardFont::Helvetica.dictionary());
        let bold = writer.add(StandardFont::HelveticaBold.dictionary());
        let contents = writer.add_stream(&self.render_content(fields));

        writer.set(catalog, format!("<< /Type /Catalog /Pages {} 0 R >>", pages));
        writer.set(
            pages,
            format!("<< /Type /Pages /Kids [{} 0 R] /Count 1 >>", page),
        );
        writer.set(
            page,
            format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Resources << /Font << /F1 {} 0 R /F2 {} 0 R >> >> /Contents {} 0 R >>",
                pages, page_width, page_height, regular, bold, contents
            ),
        );

        let mut info = b"<< /Title ".to_vec();
        info.extend_from_slice(&literal_string(REPORT_TITLE));
        info.extend_from_slice(b" /Producer ");
        info.extend_from_slice(&literal_string(PRODUCER));
        info.extend_from_slice(b" /CreationDate ");
        info.extend_from_slice(&literal_string(
            &fields.generated_at.to_pdf_date(),
        ));
        info.extend_from_slice(b" >>");
        let info = writer.add(info);

        writer.finish(catalog, Some(info))
    }
}

impl Default for PdfReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportGenerator for PdfReportGenerator {
    async fn generate(&self, fields: &ReportFields) -> Result<Vec<u8>, ReportError> {
        self.check_layout()?;
        let bytes = self.render(fields);

        debug!(
            bytes = bytes.len(),
            page_size = ?self.page_size,
            "Rendered PDF risk report"
        );
        Ok(bytes)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Pdf
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::patient::Sex;
    use crate::domain::risk::RiskResult;

    fn jane() -> ReportFields {
        ReportFields::new("Jane Doe", 50, Sex::Male, RiskResult::from_percentage(32.2))
            .with_generated_at(Timestamp::parse_rfc3339("2024-01-15T10:30:00Z").unwrap())
    }

    fn as_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    // ───────────────────────────────────────────────────────────────
    // Document structure
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn generates_complete_pdf() {
        let bytes = PdfReportGenerator::new().generate(&jane()).await.unwrap();
        let text = as_text(&bytes);

        assert!(bytes.starts_with(b"%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("/Type /Catalog /Pages 2 0 R"));
        assert!(text.contains("/Count 1"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
    }

    #[tokio::test]
    async fn page_text_contains_every_field() {
        let bytes = PdfReportGenerator::new().generate(&jane()).await.unwrap();
        let text = as_text(&bytes);

        assert!(text.contains("(CVD Risk Report) Tj"));
        assert!(text.contains("(Patient Name: Jane Doe) Tj"));
        assert!(text.contains("(Age: 50    Sex: Male) Tj"));
        assert!(text.contains("(Estimated 10-Year Risk: 32.2%) Tj"));
    }

    #[tokio::test]
    async fn page_shows_exactly_four_text_runs() {
        let bytes = PdfReportGenerator::new().generate(&jane()).await.unwrap();
        assert_eq!(as_text(&bytes).matches(" Tj\n").count(), 4);
    }

    #[tokio::test]
    async fn info_dictionary_carries_metadata() {
        let bytes = PdfReportGenerator::new().generate(&jane()).await.unwrap();
        let text = as_text(&bytes);

        assert!(text.contains("/Title (CVD Risk Report)"));
        assert!(text.contains("/Producer (cvd-risk "));
        assert!(text.contains("/CreationDate (D:20240115103000Z)"));
    }

    #[tokio::test]
    async fn output_is_reproducible_for_pinned_time() {
        let generator = PdfReportGenerator::new();
        let first = generator.generate(&jane()).await.unwrap();
        let second = generator.generate(&jane()).await.unwrap();
        assert_eq!(first, second);
    }

    // ───────────────────────────────────────────────────────────────
    // Layout
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn a4_media_box_by_default() {
        let text = as_text(&PdfReportGenerator::new().render(&jane()));
        assert!(text.contains("/MediaBox [0 0 595.28 841.89]"));
    }

    #[test]
    fn letter_media_box_when_configured() {
        let generator = PdfReportGenerator::new().with_page_size(PageSize::Letter);
        let text = as_text(&generator.render(&jane()));
        assert!(text.contains("/MediaBox [0 0 612.00 792.00]"));
    }

    #[test]
    fn title_is_centred_and_body_left_aligned() {
        let content = as_text(&PdfReportGenerator::new().render_content(&jane()));

        // Title: margin 28.35 + (538.59 - 96.01) / 2, baseline 841.89 - 46.12.
        assert!(content.contains("/F2 12.00 Tf\n249.63 795.77 Td\n(CVD Risk Report)"));
        // First body cell: margin plus 1 mm padding, one line lower.
        assert!(content.contains("/F1 12.00 Tf\n31.18 767.42 Td\n(Patient Name: Jane Doe)"));
    }

    #[test]
    fn lines_step_down_by_line_height() {
        let content = as_text(&PdfReportGenerator::new().render_content(&jane()));
        assert!(content.contains("31.18 739.08 Td\n(Age: 50    Sex: Male)"));
        assert!(content.contains("31.18 710.73 Td\n(Estimated 10-Year Risk: 32.2%)"));
    }

    #[tokio::test]
    async fn special_characters_are_escaped_and_encoded() {
        let fields = ReportFields::new("José (Pepe) O\\Neil", 61, Sex::Male, RiskResult::from_percentage(8.3));
        let bytes = PdfReportGenerator::new().generate(&fields).await.unwrap();

        let mut expected = b"(Patient Name: Jos".to_vec();
        expected.push(0xE9);
        expected.extend_from_slice(br" \(Pepe\) O\\Neil) Tj");
        assert!(bytes.windows(expected.len()).any(|w| w == expected.as_slice()));
    }

    #[tokio::test]
    async fn blank_name_prints_unknown() {
        let fields = ReportFields::new("", 50, Sex::Female, RiskResult::from_percentage(22.0));
        let bytes = PdfReportGenerator::new().generate(&fields).await.unwrap();
        let text = as_text(&bytes);

        assert!(text.contains("(Patient Name: Unknown) Tj"));
        assert!(text.contains("Sex: Female"));
    }

    #[tokio::test]
    async fn rejects_layout_that_overflows_the_page() {
        let config = ReportConfig {
            line_height_mm: 100.0,
            ..ReportConfig::default()
        };
        let result = PdfReportGenerator::from_config(&config).generate(&jane()).await;
        assert!(matches!(result, Err(ReportError::RenderFailed(_))));
    }

    #[tokio::test]
    async fn rejects_non_finite_font_size() {
        let config = ReportConfig {
            body_font_size: f64::NAN,
            ..ReportConfig::default()
        };
        let result = PdfReportGenerator::from_config(&config).generate(&jane()).await;
        assert!(matches!(result, Err(ReportError::RenderFailed(_))));
    }

    #[test]
    fn reports_pdf_format() {
        assert_eq!(PdfReportGenerator::new().format(), ReportFormat::Pdf);
    }
}
