//! Minimal PDF 1.4 serialisation.
//!
//! Enough of the format for a text-only page: numbered indirect objects,
//! an uncompressed content stream, the cross-reference table and trailer.
//! Text is shown with the standard Type 1 fonts, which every reader ships,
//! so no font program is embedded.

use std::fmt::Write as _;

/// Points per millimetre.
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Serialises numbered objects into a complete PDF file.
///
/// Objects are numbered from 1 in the order they are added. The catalog
/// and info objects are referenced from the trailer by number.
#[derive(Debug, Default)]
pub struct PdfWriter {
    objects: Vec<Vec<u8>>,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the next object number without content. Fill it with
    /// [`PdfWriter::set`] before calling [`PdfWriter::finish`].
    pub fn reserve(&mut self) -> usize {
        self.objects.push(Vec::new());
        self.objects.len()
    }

    /// Adds an object body (everything between `obj` and `endobj`).
    pub fn add(&mut self, body: impl Into<Vec<u8>>) -> usize {
        self.objects.push(body.into());
        self.objects.len()
    }

    /// Replaces the body of a reserved object.
    pub fn set(&mut self, id: usize, body: impl Into<Vec<u8>>) {
        if let Some(slot) = id.checked_sub(1).and_then(|i| self.objects.get_mut(i)) {
            *slot = body.into();
        }
    }

    /// Adds a stream object with its `/Length` entry.
    pub fn add_stream(&mut self, content: &[u8]) -> usize {
        let mut body = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(b"\nendstream");
        self.add(body)
    }

    /// Writes header, objects, xref table and trailer.
    pub fn finish(self, root: usize, info: Option<usize>) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n");
        // Binary marker so transfer tools treat the file as binary.
        out.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        let mut offsets = Vec::with_capacity(self.objects.len());
        for (index, body) in self.objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", index + 1).as_bytes());
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_offset = out.len();
        let size = self.objects.len() + 1;
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", size);
        for offset in &offsets {
            let _ = write!(xref, "{:010} 00000 n \n", offset);
        }

        let _ = write!(xref, "trailer\n<< /Size {} /Root {} 0 R", size, root);
        if let Some(info) = info {
            let _ = write!(xref, " /Info {} 0 R", info);
        }
        let _ = write!(xref, " >>\nstartxref\n{}\n%%EOF\n", xref_offset);
        out.extend_from_slice(xref.as_bytes());

        out
    }
}

/// Encodes text as a PDF literal string in WinAnsiEncoding, parentheses
/// included.
///
/// Characters outside the encoding become `?`; control characters become
/// spaces.
pub fn literal_string(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 2);
    out.push(b'(');
    for c in text.chars() {
        match c {
            '\\' | '(' | ')' => {
                out.push(b'\\');
                out.push(c as u8);
            }
            c if c.is_control() => out.push(b' '),
            c => out.push(win_ansi_byte(c)),
        }
    }
    out.push(b')');
    out
}

/// Maps a character to its WinAnsiEncoding code.
pub fn win_ansi_byte(c: char) -> u8 {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => code as u8,
        _ => match c {
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        },
    }
}

/// Standard Type 1 fonts used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// PostScript name used in `/BaseFont`.
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Font dictionary body.
    pub fn dictionary(&self) -> String {
        format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
            self.base_font()
        )
    }

    /// Width of `text` in points at `size`.
    pub fn text_width(&self, text: &str, size: f64) -> f64 {
        let units: u32 = text
            .chars()
            .map(|c| self.glyph_width(win_ansi_byte(c)))
            .sum();
        f64::from(units) * size / 1000.0
    }

    /// Advance width in 1/1000 em from the Adobe AFM metrics. Codes outside
    /// printable ASCII use the width of a digit.
    fn glyph_width(&self, code: u8) -> u32 {
        let table = match self {
            StandardFont::Helvetica => &HELVETICA_WIDTHS,
            StandardFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        match code {
            0x20..=0x7E => u32::from(table[usize::from(code - 0x20)]),
            _ => 556,
        }
    }
}

/// Helvetica widths for 0x20..=0x7E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Helvetica-Bold widths for 0x20..=0x7E.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

/// Builds a page content stream of positioned text runs.
#[derive(Debug, Default)]
pub struct ContentStream {
    ops: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `text` with its baseline starting at (`x`, `y`) in points.
    pub fn text(&mut self, font_resource: &str, size: f64, x: f64, y: f64, text: &str) {
        self.ops.extend_from_slice(
            format!("BT\n/{} {:.2} Tf\n{:.2} {:.2} Td\n", font_resource, size, x, y).as_bytes(),
        );
        self.ops.extend_from_slice(&literal_string(text));
        self.ops.extend_from_slice(b" Tj\nET\n");
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.ops
    }
}
