//! Composed export document.
//!
//! Every encoder serializes the same [`ReportDocument`] shape: descriptor
//! metadata, the count block, the metrics block, and the ordered feature
//! list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ds_common::{Report, ReportSummary, ReportType, RiskDistribution, RiskFeature};

/// Aggregate prediction counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    /// Total predictions in the reporting window.
    pub total_predictions: u64,
    /// Predictions classified high risk.
    pub high_risk: u64,
    /// Open critical issues.
    pub critical_issues: u64,
    /// Issues resolved in the window.
    pub resolved: u64,
}

/// Derived metrics block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetrics {
    /// Mean defect probability, in `[0, 1]`.
    pub defect_probability_avg: f64,
    /// Percentage split across risk levels.
    pub risk_distribution: RiskDistribution,
}

/// The full document serialized by the JSON and XML encoders and laid out
/// by the PDF encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Descriptor id.
    pub report_id: u64,
    /// Report title. Free-form text; escaped by the XML encoder.
    pub title: String,
    /// Report cadence, carried verbatim.
    pub report_type: ReportType,
    /// Descriptor creation time.
    pub generated_at: DateTime<Utc>,
    /// Count block.
    pub summary: SummaryCounts,
    /// Metrics block.
    pub metrics: ReportMetrics,
    /// Ordered feature attribution list.
    pub top_risk_features: Vec<RiskFeature>,
}

impl ReportDocument {
    /// Compose the export document from a descriptor and its payload.
    pub fn compose(report: &Report, summary: &ReportSummary) -> Self {
        ReportDocument {
            report_id: report.id,
            title: report.title.clone(),
            report_type: report.report_type,
            generated_at: report.created_at,
            summary: SummaryCounts {
                total_predictions: summary.total_predictions,
                high_risk: summary.high_risk,
                critical_issues: summary.critical_issues,
                resolved: summary.resolved,
            },
            metrics: ReportMetrics {
                defect_probability_avg: summary.defect_probability_avg,
                risk_distribution: summary.risk_distribution,
            },
            top_risk_features: summary.top_risk_features.clone(),
        }
    }
}
