//! Report descriptors and summary payloads.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Cadence of a generated report.
///
/// The type is carried verbatim into every export; it does not alter the
/// summary content or filter the underlying predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// One day of predictions
    #[default]
    Daily,

    /// One calendar month of predictions
    Monthly,

    /// User-defined window
    Custom,
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportType::Daily => write!(f, "daily"),
            ReportType::Monthly => write!(f, "monthly"),
            ReportType::Custom => write!(f, "custom"),
        }
    }
}

/// Supported export encodings.
///
/// Dispatch on this enum is exhaustive: an unknown format name fails at
/// parse time with [`Error::UnsupportedFormat`] instead of silently
/// producing no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Pretty-printed JSON document
    #[default]
    Json,

    /// Hand-serialized XML element tree
    Xml,

    /// Paginated PDF document
    Pdf,
}

impl ReportFormat {
    /// File extension for this format, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Xml => "xml",
            ReportFormat::Pdf => "pdf",
        }
    }

    /// MIME type of the exported artifact.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Json => "application/json",
            ReportFormat::Xml => "application/xml",
            ReportFormat::Pdf => "application/pdf",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ReportFormat::Json),
            "xml" => Ok(ReportFormat::Xml),
            "pdf" => Ok(ReportFormat::Pdf),
            other => Err(Error::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// How strongly a feature pushes predictions toward defect risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureImpact {
    /// Minor contribution
    Low,
    /// Moderate contribution
    Medium,
    /// Dominant contribution
    High,
}

impl std::fmt::Display for FeatureImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureImpact::Low => write!(f, "low"),
            FeatureImpact::Medium => write!(f, "medium"),
            FeatureImpact::High => write!(f, "high"),
        }
    }
}

/// Report descriptor. Immutable once created.
///
/// Lifecycle: create → list → export (zero or more times) → optional
/// delete. Records exist only in the in-memory [`crate::ReportStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Store-assigned identifier.
    pub id: u64,
    /// Free-form title supplied at creation.
    pub title: String,
    /// Report cadence.
    pub report_type: ReportType,
    /// Export encoding to produce.
    pub report_format: ReportFormat,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A per-feature attribution entry in the summary.
///
/// The SHAP-style value is treated as an opaque numeric field to be
/// formatted, not computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFeature {
    /// Code metric name (e.g. `v(g)`, `loc`).
    pub feature_name: String,
    /// Average observed value of the metric.
    pub avg_value: f64,
    /// Contribution bucket.
    pub impact: FeatureImpact,
}

/// Risk level breakdown as integer percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: u8,
    pub medium: u8,
    pub high: u8,
    pub critical: u8,
}

/// Aggregate payload embedded in an exported report.
///
/// In a full deployment this would be computed from stored predictions;
/// here it is synthesized by [`crate::demo`]. The same fields are used
/// regardless of [`ReportType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total predictions in the window.
    pub total_predictions: u64,
    /// Predictions classified high risk.
    pub high_risk: u64,
    /// Open critical issues.
    pub critical_issues: u64,
    /// Issues resolved in the window.
    pub resolved: u64,
    /// Mean defect probability, in `[0, 1]`.
    pub defect_probability_avg: f64,
    /// Percentage split across risk levels.
    pub risk_distribution: RiskDistribution,
    /// Highest-attribution features, ordered by attribution.
    pub top_risk_features: Vec<RiskFeature>,
}
