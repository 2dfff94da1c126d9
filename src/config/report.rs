//! Report layout configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::report::ReportFields;

/// Paper size of generated PDF reports.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions_pt(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
        }
    }
}

/// Layout of the printable report.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Paper size
    #[serde(default)]
    pub page_size: PageSize,

    /// Left, right and top margin in millimetres
    #[serde(default = "default_margin_mm")]
    pub margin_mm: f64,

    /// Height of each printed line in millimetres
    #[serde(default = "default_line_height_mm")]
    pub line_height_mm: f64,

    /// Title font size in points
    #[serde(default = "default_font_size")]
    pub title_font_size: f64,

    /// Body font size in points
    #[serde(default = "default_font_size")]
    pub body_font_size: f64,
}

impl ReportConfig {
    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for size in [self.title_font_size, self.body_font_size] {
            if !(6.0..=72.0).contains(&size) {
                return Err(ValidationError::InvalidFontSize(size));
            }
        }
        if !(0.0..=50.0).contains(&self.margin_mm) {
            return Err(ValidationError::InvalidMargin(self.margin_mm));
        }
        if !(self.line_height_mm > 0.0) {
            return Err(ValidationError::InvalidLineHeight(self.line_height_mm));
        }

        let (_, height_pt) = self.page_size.dimensions_pt();
        let height_mm = height_pt * 25.4 / 72.0;
        let lines = (1 + ReportFields::BODY_LINE_COUNT) as f64;
        if 2.0 * self.margin_mm + lines * self.line_height_mm > height_mm {
            return Err(ValidationError::PageOverflow);
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            margin_mm: default_margin_mm(),
            line_height_mm: default_line_height_mm(),
            title_font_size: default_font_size(),
            body_font_size: default_font_size(),
        }
    }
}

fn default_margin_mm() -> f64 {
    10.0
}

fn default_line_height_mm() -> f64 {
    10.0
}

fn default_font_size() -> f64 {
    12.0
}
