//! Multi-format report exporter for DefectScope.
//!
//! Turns a [`ds_common::Report`] descriptor plus its
//! [`ds_common::ReportSummary`] payload into a downloadable artifact in the
//! format named on the descriptor.
//!
//! # Encoders
//!
//! - **JSON**: pretty-printed serde document, lossless round-trip
//! - **XML**: hand-serialized fixed element tree with entity escaping
//! - **PDF**: paginated single-file document with a top-down cursor model
//!
//! # Example
//!
//! ```
//! use ds_common::demo;
//! use ds_report::ReportExporter;
//!
//! let report = demo::reports().remove(0);
//! let artifact = ReportExporter::new()
//!     .export(&report, &demo::summary())
//!     .unwrap();
//! assert_eq!(artifact.mime_type, "application/json");
//! ```

pub mod document;
pub mod exporter;
pub mod json;
pub mod pdf;
pub mod xml;

pub use document::{ReportDocument, ReportMetrics, SummaryCounts};
pub use exporter::{file_name, ExportArtifact, ReportExporter};

pub use ds_common::error::{Error, Result};
