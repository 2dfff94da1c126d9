//! Markdown report adapter.
//!
//! Renders the same content as the PDF report as a Markdown document, for
//! previews and plain-text channels.

use async_trait::async_trait;

use crate::domain::report::{ReportFields, REPORT_TITLE};
use crate::ports::{ReportError, ReportFormat, ReportGenerator};

/// Markdown implementation of ReportGenerator.
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportGenerator;

impl MarkdownReportGenerator {
    /// Creates a new markdown report generator.
    pub fn new() -> Self {
        Self
    }

    /// Renders the document text.
    pub fn render(&self, fields: &ReportFields) -> String {
        let mut doc = format!("# {}\n\n", REPORT_TITLE);
        for line in fields.body_lines() {
            doc.push_str(&escape_markdown(&line));
            doc.push_str("\n\n");
        }
        doc
    }
}

#[async_trait]
impl ReportGenerator for MarkdownReportGenerator {
    async fn generate(&self, fields: &ReportFields) -> Result<Vec<u8>, ReportError> {
        Ok(self.render(fields).into_bytes())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

/// Escapes characters that would otherwise start Markdown formatting.
fn escape_markdown(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '#' | '<' | '>') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::Sex;
    use crate::domain::risk::RiskResult;

    #[test]
    fn renders_title_and_fields() {
        let fields =
            ReportFields::new("Jane Doe", 50, Sex::Male, RiskResult::from_percentage(32.2));
        let doc = MarkdownReportGenerator::new().render(&fields);

        assert_eq!(
            doc,
            "# CVD Risk Report\n\n\
             Patient Name: Jane Doe\n\n\
             Age: 50    Sex: Male\n\n\
             Estimated 10-Year Risk: 32.2%\n\n"
        );
    }

    #[test]
    fn escapes_formatting_in_names() {
        let fields =
            ReportFields::new("*Bold* _name_", 70, Sex::Female, RiskResult::from_percentage(9.0));
        let doc = MarkdownReportGenerator::new().render(&fields);

        assert!(doc.contains(r"Patient Name: \*Bold\* \_name\_"));
    }

    #[tokio::test]
    async fn generate_returns_utf8_bytes() {
        let fields = ReportFields::new("Zoë", 45, Sex::Female, RiskResult::from_percentage(5.5));
        let bytes = MarkdownReportGenerator::new().generate(&fields).await.unwrap();

        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Zoë"));
        assert!(text.contains("5.5%"));
    }

    #[test]
    fn reports_markdown_format() {
        assert_eq!(MarkdownReportGenerator::new().format(), ReportFormat::Markdown);
    }
}
