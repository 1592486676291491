//! Minimal PDF document writer.
//!
//! Emits a single-file PDF 1.4 document: catalog, page tree, one content
//! stream per page, and the two built-in Type1 fonts (Helvetica and
//! Helvetica-Bold). Nothing is compressed and no external resources are
//! referenced, so the output is self-contained and byte-stable for a given
//! sequence of text operations.

/// A4 page width in points.
pub const PAGE_WIDTH: f64 = 595.28;
/// A4 page height in points.
pub const PAGE_HEIGHT: f64 = 841.89;

/// Built-in fonts available to text operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Helvetica, resource name `/F1`.
    Regular,
    /// Helvetica-Bold, resource name `/F2`.
    Bold,
}

impl Font {
    fn resource(&self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

/// Accumulates text operations per page and renders the final byte stream.
#[derive(Debug)]
pub struct PdfWriter {
    pages: Vec<String>,
}

impl PdfWriter {
    /// Create a writer with a single empty page.
    pub fn new() -> Self {
        Self {
            pages: vec![String::new()],
        }
    }

    /// Start a new page; subsequent text lands on it.
    pub fn add_page(&mut self) {
        self.pages.push(String::new());
    }

    /// Number of pages so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Content stream of a page, for inspection.
    pub fn page_content(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    /// Draw a line of text on the current page.
    ///
    /// `y_from_top` is measured downward from the top edge; PDF user space
    /// has its origin at the bottom-left corner, so the coordinate is
    /// flipped at emit time.
    pub fn text(&mut self, x: f64, y_from_top: f64, size: f64, font: Font, text: &str) {
        let y = PAGE_HEIGHT - y_from_top;
        let page = self
            .pages
            .last_mut()
            .unwrap_or_else(|| unreachable!("writer always holds at least one page"));
        page.push_str(&format!(
            "BT\n/{} {:.1} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
            font.resource(),
            size,
            x,
            y,
            escape_string(text)
        ));
    }

    /// Render the accumulated pages into PDF bytes.
    pub fn finish(self) -> Vec<u8> {
        // Object numbering: 1 catalog, 2 page tree, 3/4 fonts, then one
        // page object and one content stream per page.
        let page_count = self.pages.len();
        let object_count = 4 + 2 * page_count;

        let mut objects: Vec<String> = Vec::with_capacity(object_count);
        objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());

        let kids: Vec<String> = (0..page_count)
            .map(|i| format!("{} 0 R", 5 + 2 * i))
            .collect();
        objects.push(format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        ));

        objects.push(
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        );
        objects.push(
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>".to_string(),
        );

        for (i, content) in self.pages.iter().enumerate() {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.2} {PAGE_HEIGHT:.2}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                6 + 2 * i
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}endstream",
                content.len(),
                content
            ));
        }

        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n");

        let mut offsets = Vec::with_capacity(object_count);
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref_offset = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", object_count + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                object_count + 1,
                xref_offset
            )
            .as_bytes(),
        );

        out
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a string for a PDF literal string object.
///
/// Backslash and parentheses are the delimiters; anything outside the
/// printable ASCII range is replaced, since the built-in fonts are used
/// with their standard encoding.
fn escape_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            ' '..='~' => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_string_delimiters() {
        assert_eq!(escape_string("v(g)"), "v\\(g\\)");
        assert_eq!(escape_string("a\\b"), "a\\\\b");
        assert_eq!(escape_string("plain"), "plain");
    }

    #[test]
    fn test_escape_string_non_ascii_replaced() {
        assert_eq!(escape_string("café"), "caf?");
        assert_eq!(escape_string("tab\there"), "tab?here");
    }

    #[test]
    fn test_finish_structure() {
        let mut writer = PdfWriter::new();
        writer.text(48.0, 48.0, 12.0, Font::Regular, "hello");
        let bytes = writer.finish();
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("(hello) Tj"));
    }

    #[test]
    fn test_page_objects_match_page_count() {
        let mut writer = PdfWriter::new();
        writer.text(48.0, 48.0, 12.0, Font::Regular, "one");
        writer.add_page();
        writer.text(48.0, 48.0, 12.0, Font::Bold, "two");
        assert_eq!(writer.page_count(), 2);

        let text = String::from_utf8_lossy(&writer.finish()).into_owned();
        assert_eq!(text.matches("/Type /Page ").count(), 2);
        assert!(text.contains("/Count 2"));
    }

    #[test]
    fn test_xref_offsets_are_exact() {
        let mut writer = PdfWriter::new();
        writer.text(48.0, 48.0, 12.0, Font::Regular, "hello");
        let bytes = writer.finish();
        let text = String::from_utf8_lossy(&bytes);

        // Every xref entry must point at the "N 0 obj" it claims to.
        let xref_at = text.find("xref\n").expect("xref table present");
        for (i, line) in text[xref_at..]
            .lines()
            .skip(3) // "xref", subsection header, free entry
            .take_while(|l| l.ends_with("n "))
            .enumerate()
        {
            let offset: usize = line[..10].parse().expect("10-digit offset");
            let expected = format!("{} 0 obj", i + 1);
            assert!(
                text[offset..].starts_with(&expected),
                "object {} offset mismatch",
                i + 1
            );
        }
    }
}
