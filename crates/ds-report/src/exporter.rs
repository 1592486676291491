//! Export dispatch and artifact assembly.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use ds_common::{Report, ReportFormat, ReportSummary};

use crate::document::ReportDocument;
use crate::{json, pdf, xml, Result};

/// A finished export: the encoded bytes plus the metadata the host
/// environment needs to save them as a download.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// Encoded document.
    pub bytes: Vec<u8>,
    /// Deterministic file name, `<sanitized-title>_<YYYY-MM-DD>.<ext>`.
    pub file_name: String,
    /// MIME type matching the encoding.
    pub mime_type: &'static str,
}

/// Renders a report descriptor plus its summary payload into one of the
/// supported encodings.
///
/// Stateless; each export allocates its own output buffer, so concurrent
/// callers never share mutable state.
#[derive(Debug, Default)]
pub struct ReportExporter;

impl ReportExporter {
    /// Create an exporter.
    pub fn new() -> Self {
        Self
    }

    /// Export the report in the format named on its descriptor.
    pub fn export(&self, report: &Report, summary: &ReportSummary) -> Result<ExportArtifact> {
        debug!(
            report_id = report.id,
            format = %report.report_format,
            "Composing export document"
        );
        let doc = ReportDocument::compose(report, summary);

        let bytes = match report.report_format {
            ReportFormat::Json => json::encode(&doc)?,
            ReportFormat::Xml => xml::encode(&doc),
            ReportFormat::Pdf => pdf::encode(&doc),
        };

        let file_name = file_name(report);
        info!(
            bytes = bytes.len(),
            file = %file_name,
            "Report exported"
        );

        Ok(ExportArtifact {
            bytes,
            file_name,
            mime_type: report.report_format.mime_type(),
        })
    }

    /// Export and write the artifact into `dir`, returning the full path.
    pub fn export_to_dir(
        &self,
        report: &Report,
        summary: &ReportSummary,
        dir: &Path,
    ) -> Result<PathBuf> {
        let artifact = self.export(report, summary)?;
        let path = dir.join(&artifact.file_name);
        std::fs::write(&path, &artifact.bytes)?;
        Ok(path)
    }
}

/// Derive the download file name from the descriptor.
///
/// Each whitespace character in the title becomes an underscore; the
/// `YYYY-MM-DD` portion of the creation time and the format extension are
/// appended.
pub fn file_name(report: &Report) -> String {
    let stem: String = report
        .title
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!(
        "{}_{}.{}",
        stem,
        report.created_at.format("%Y-%m-%d"),
        report.report_format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_common::demo;

    #[test]
    fn test_file_name_determinism() {
        let report = demo::reports().remove(0);
        assert_eq!(
            file_name(&report),
            "Daily_Risk_Report_-_January_15_2024-01-15.json"
        );
    }

    #[test]
    fn test_file_name_per_format() {
        let reports = demo::reports();
        assert!(file_name(&reports[1]).ends_with("_2024-01-01.xml"));
        assert!(file_name(&reports[2]).ends_with("_2024-01-10.pdf"));
    }

    #[test]
    fn test_export_sets_matching_mime() {
        let exporter = ReportExporter::new();
        let summary = demo::summary();
        for report in demo::reports() {
            let artifact = exporter.export(&report, &summary).unwrap();
            assert_eq!(artifact.mime_type, report.report_format.mime_type());
            assert!(!artifact.bytes.is_empty());
        }
    }
}
