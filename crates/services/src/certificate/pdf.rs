use std::fmt::Write as _;

use super::{CertificateFields, CertificateRenderer};
use crate::error::CertificateError;

// A4 landscape, in points.
const PAGE_WIDTH: f32 = 842.0;
const PAGE_HEIGHT: f32 = 595.0;

#[derive(Clone, Copy)]
enum Font {
    Helvetica,
    HelveticaBold,
    TimesBold,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::TimesBold => "F3",
        }
    }
}

struct TextLine {
    text: String,
    font: Font,
    size: f32,
    rgb: (f32, f32, f32),
    y: f32,
}

const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);
const DARK_BLUE: (f32, f32, f32) = (0.1, 0.2, 0.5);
const NAME_BLUE: (f32, f32, f32) = (0.2, 0.4, 0.8);
const DARK_GRAY: (f32, f32, f32) = (0.3, 0.3, 0.3);

/// Writes a single-page landscape PDF using the standard Type 1 fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfCertificateRenderer;

impl CertificateRenderer for PdfCertificateRenderer {
    fn render(&self, fields: &CertificateFields) -> Result<Vec<u8>, CertificateError> {
        let content = page_content(&layout(fields))?;
        Ok(assemble(&content))
    }
}

fn layout(fields: &CertificateFields) -> Vec<TextLine> {
    let line = |text: String, font, size, rgb, y| TextLine {
        text,
        font,
        size,
        rgb,
        y,
    };
    vec![
        line("Certificate of Participation".into(), Font::TimesBold, 36.0, DARK_BLUE, 470.0),
        line("This is to certify that".into(), Font::Helvetica, 16.0, DARK_GRAY, 400.0),
        line(fields.student_name.clone(), Font::TimesBold, 28.0, NAME_BLUE, 350.0),
        line(
            format!("has successfully participated in {}", fields.course),
            Font::Helvetica,
            16.0,
            BLACK,
            300.0,
        ),
        line(
            format!("Conducted by {}", fields.instructor),
            Font::HelveticaBold,
            14.0,
            BLACK,
            260.0,
        ),
        line(format!("at {}", fields.institution), Font::Helvetica, 14.0, BLACK, 235.0),
        line(
            format!("Date: {}", fields.issue_date_label()),
            Font::HelveticaBold,
            14.0,
            BLACK,
            140.0,
        ),
    ]
}

fn page_content(lines: &[TextLine]) -> Result<Vec<u8>, CertificateError> {
    let fmt_err = |e: std::fmt::Error| CertificateError::Render(e.to_string());
    let mut ops = String::new();
    writeln!(ops, "{} {} {} RG 4 w 30 30 782 535 re S", DARK_BLUE.0, DARK_BLUE.1, DARK_BLUE.2)
        .map_err(fmt_err)?;

    let mut body = ops.into_bytes();
    for line in lines {
        let encoded = encode_text(&line.text);
        // Standard fonts average roughly half an em per glyph; close enough to centre.
        let approx_width = line.size * 0.5 * encoded.len() as f32;
        let x = ((PAGE_WIDTH - approx_width) / 2.0).max(40.0);
        let mut head = String::new();
        write!(
            head,
            "BT /{} {} Tf {} {} {} rg {:.1} {:.1} Td (",
            line.font.resource(),
            line.size,
            line.rgb.0,
            line.rgb.1,
            line.rgb.2,
            x,
            line.y
        )
        .map_err(fmt_err)?;
        body.extend_from_slice(head.as_bytes());
        body.extend_from_slice(&encoded);
        body.extend_from_slice(b") Tj ET\n");
    }
    Ok(body)
}

/// WinAnsi-ish encoding for a literal string: Latin-1 passes through, other
/// characters become `?`, and delimiters are escaped.
fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(ch as u8);
            }
            ' '..='~' => out.push(ch as u8),
            '\u{a0}'..='\u{ff}' => out.push(u8::try_from(u32::from(ch)).unwrap_or(b'?')),
            _ => out.push(b'?'),
        }
    }
    out
}

fn assemble(content: &[u8]) -> Vec<u8> {
    let font = |base: &str| {
        format!("<< /Type /Font /Subtype /Type1 /BaseFont /{base} /Encoding /WinAnsiEncoding >>")
            .into_bytes()
    };
    let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
    stream.extend_from_slice(content);
    stream.extend_from_slice(b"\nendstream");

    let objects: Vec<Vec<u8>> = vec![
        b"<< /Type /Catalog /Pages 2 0 R >>".to_vec(),
        b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_vec(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 4 0 R /F2 5 0 R /F3 6 0 R >> >> /Contents 7 0 R >>"
        )
        .into_bytes(),
        font("Helvetica"),
        font("Helvetica-Bold"),
        font("Times-Bold"),
        stream,
    ];

    let mut out = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, object) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n", index + 1).as_bytes());
        out.extend_from_slice(object);
        out.extend_from_slice(b"\nendobj\n");
    }

    let xref_at = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));
    out.extend_from_slice(xref.as_bytes());
    out
}
