//! PDF encoder.
//!
//! Lays the document out with an implicit vertical cursor: a large title
//! line, then the Report Info, Summary, Metrics, Risk Distribution, and
//! Top Risk Features sections, each a bold heading followed by one line
//! per field. Before any line is emitted, the cursor is checked against a
//! near-bottom threshold; crossing it starts a new page with the cursor
//! reset to the top margin. A page break therefore never leaves a page
//! empty, and every field appears exactly once in order.

pub mod writer;

use chrono::SecondsFormat;

use crate::document::ReportDocument;
use self::writer::{Font, PdfWriter, PAGE_HEIGHT};

/// Left and top margin in points.
const MARGIN: f64 = 48.0;
/// Vertical advance per body line.
const LINE_HEIGHT: f64 = 16.0;
/// Extra gap above a section heading.
const SECTION_GAP: f64 = 10.0;
/// Cursor positions past this start a new page.
const BOTTOM_LIMIT: f64 = PAGE_HEIGHT - MARGIN;

const TITLE_SIZE: f64 = 18.0;
const HEADING_SIZE: f64 = 13.0;
const BODY_SIZE: f64 = 10.0;

/// Encode the document as a paginated PDF.
pub fn encode(doc: &ReportDocument) -> Vec<u8> {
    compose(doc).finish()
}

fn compose(doc: &ReportDocument) -> PdfWriter {
    let mut page = Cursor::new();

    page.line(TITLE_SIZE, Font::Bold, &doc.title);
    page.advance(SECTION_GAP);

    page.heading("Report Info");
    page.field("Report ID", &doc.report_id.to_string());
    page.field("Type", &doc.report_type.to_string());
    page.field(
        "Generated",
        &doc.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    );

    page.heading("Summary");
    page.field(
        "Total Predictions",
        &doc.summary.total_predictions.to_string(),
    );
    page.field("High Risk", &doc.summary.high_risk.to_string());
    page.field("Critical Issues", &doc.summary.critical_issues.to_string());
    page.field("Resolved", &doc.summary.resolved.to_string());

    page.heading("Metrics");
    page.field(
        "Avg Defect Probability",
        &format!("{:.2}", doc.metrics.defect_probability_avg),
    );

    page.heading("Risk Distribution");
    let dist = &doc.metrics.risk_distribution;
    page.field("Low", &format!("{}%", dist.low));
    page.field("Medium", &format!("{}%", dist.medium));
    page.field("High", &format!("{}%", dist.high));
    page.field("Critical", &format!("{}%", dist.critical));

    page.heading("Top Risk Features");
    for feature in &doc.top_risk_features {
        page.field(
            &feature.feature_name,
            &format!("{} (impact: {})", feature.avg_value, feature.impact),
        );
    }

    page.into_writer()
}

/// Top-down layout cursor over a [`PdfWriter`].
struct Cursor {
    writer: PdfWriter,
    y: f64,
}

impl Cursor {
    fn new() -> Self {
        Self {
            writer: PdfWriter::new(),
            y: MARGIN,
        }
    }

    /// Emit one line, breaking the page first if it would cross the
    /// bottom threshold.
    fn line(&mut self, size: f64, font: Font, text: &str) {
        if self.y + LINE_HEIGHT > BOTTOM_LIMIT {
            self.writer.add_page();
            self.y = MARGIN;
        }
        self.writer.text(MARGIN, self.y + size, size, font, text);
        self.y += LINE_HEIGHT;
    }

    fn heading(&mut self, text: &str) {
        self.advance(SECTION_GAP);
        self.line(HEADING_SIZE, Font::Bold, text);
    }

    fn field(&mut self, label: &str, value: &str) {
        self.line(BODY_SIZE, Font::Regular, &format!("{label}: {value}"));
    }

    /// Move the cursor down without emitting anything. Clamped so a gap at
    /// the page bottom cannot push the next line past the threshold twice.
    fn advance(&mut self, gap: f64) {
        self.y = (self.y + gap).min(BOTTOM_LIMIT);
    }

    fn into_writer(self) -> PdfWriter {
        self.writer
    }
}
