//! DefectScope common types, errors, and the report store.
//!
//! This crate provides foundational types shared across DefectScope crates:
//! - Report descriptors and summary payloads
//! - Format and type enums with stable wire names
//! - Common error types with stable codes
//! - The in-memory report repository
//! - Demo data used in place of a model backend

pub mod demo;
pub mod error;
pub mod model;
pub mod store;

pub use error::{Error, Result};
pub use model::{
    FeatureImpact, Report, ReportFormat, ReportSummary, ReportType, RiskDistribution, RiskFeature,
};
pub use store::ReportStore;
