//! Hard-coded demonstration data.
//!
//! DefectScope ships without a model backend; every observed value is a
//! fixed constant. This module holds the demo summary and the seeded
//! report rows used by the CLI and by tests.

use chrono::{DateTime, Utc};

use crate::model::{
    FeatureImpact, Report, ReportFormat, ReportSummary, ReportType, RiskDistribution, RiskFeature,
};

/// Aggregate summary used for every export, regardless of report type.
pub fn summary() -> ReportSummary {
    ReportSummary {
        total_predictions: 1234,
        high_risk: 89,
        critical_issues: 23,
        resolved: 456,
        defect_probability_avg: 0.75,
        risk_distribution: RiskDistribution {
            low: 58,
            medium: 22,
            high: 10,
            critical: 10,
        },
        top_risk_features: vec![
            feature("v(g)", 12.0, FeatureImpact::High),
            feature("loc", 450.0, FeatureImpact::High),
            feature("branchCount", 25.0, FeatureImpact::Medium),
            feature("num_functions", 15.0, FeatureImpact::Medium),
            feature("maintainability_index", 45.0, FeatureImpact::Low),
            feature("num_classes", 3.0, FeatureImpact::Low),
            feature("num_imports", 8.0, FeatureImpact::Low),
        ],
    }
}

/// The three seeded report rows shown on first launch.
pub fn reports() -> Vec<Report> {
    vec![
        Report {
            id: 1,
            title: "Daily Risk Report - January 15".to_string(),
            report_type: ReportType::Daily,
            report_format: ReportFormat::Json,
            created_at: ts("2024-01-15T10:00:00Z"),
        },
        Report {
            id: 2,
            title: "Monthly Analytics Report - December 2023".to_string(),
            report_type: ReportType::Monthly,
            report_format: ReportFormat::Xml,
            created_at: ts("2024-01-01T09:00:00Z"),
        },
        Report {
            id: 3,
            title: "System Performance Report - January".to_string(),
            report_type: ReportType::Monthly,
            report_format: ReportFormat::Pdf,
            created_at: ts("2024-01-10T14:30:00Z"),
        },
    ]
}

fn feature(name: &str, avg_value: f64, impact: FeatureImpact) -> RiskFeature {
    RiskFeature {
        feature_name: name.to_string(),
        avg_value,
        impact,
    }
}

fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
