//! Error types for DefectScope.
//!
//! Structured error handling with stable error codes for machine parsing,
//! category classification, and recoverability hints. Errors serialize to
//! structured JSON for machine consumers:
//!
//! ```json
//! {
//!   "code": 20,
//!   "category": "export",
//!   "message": "unsupported report format: csv",
//!   "recoverable": false
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for DefectScope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Report store errors.
    Report,
    /// Export pipeline errors.
    Export,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Report => write!(f, "report"),
            ErrorCategory::Export => write!(f, "export"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for DefectScope.
#[derive(Error, Debug)]
pub enum Error {
    // Report store errors (10-19)
    #[error("report not found: {id}")]
    ReportNotFound { id: u64 },

    // Export errors (20-29)
    #[error("unsupported report format: {format}")]
    UnsupportedFormat { format: String },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code for this error type.
    ///
    /// Codes are grouped by category:
    /// - 10-19: Report store errors
    /// - 20-29: Export errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::ReportNotFound { .. } => 10,
            Error::UnsupportedFormat { .. } => 20,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::ReportNotFound { .. } => ErrorCategory::Report,
            Error::UnsupportedFormat { .. } => ErrorCategory::Export,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns whether this error is potentially recoverable.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Record is gone; retrying the same id cannot succeed
            Error::ReportNotFound { .. } => false,
            // Caller must pick one of the supported formats
            Error::UnsupportedFormat { .. } => false,
            // Often transient
            Error::Io(_) => true,
            Error::Json(_) => true,
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::ReportNotFound { .. } => "Report Not Found",
            Error::UnsupportedFormat { .. } => "Unsupported Export Format",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Serialization Error",
        }
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,
    /// Error category for grouping.
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
    /// Whether the error is potentially recoverable.
    pub recoverable: bool,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            recoverable: err.is_recoverable(),
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}

/// Format an error for human-readable stderr output.
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, reset) = if use_color {
        ("\x1b[31m", "\x1b[0m")
    } else {
        ("", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}",
        red = red,
        reset = reset,
        headline = err.headline(),
        message = err,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(Error::ReportNotFound { id: 7 }.code(), 10);
        assert_eq!(
            Error::UnsupportedFormat {
                format: "csv".into()
            }
            .code(),
            20
        );
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            Error::ReportNotFound { id: 7 }.category(),
            ErrorCategory::Report
        );
        assert_eq!(
            Error::UnsupportedFormat {
                format: "csv".into()
            }
            .category(),
            ErrorCategory::Export
        );
    }

    #[test]
    fn test_error_recoverable() {
        assert!(!Error::ReportNotFound { id: 7 }.is_recoverable());
        assert!(!Error::UnsupportedFormat {
            format: "csv".into()
        }
        .is_recoverable());
    }

    #[test]
    fn test_structured_error_json() {
        let err = Error::UnsupportedFormat {
            format: "csv".into(),
        };
        let json = StructuredError::from(&err).to_json();

        assert!(json.contains(r#""code":20"#));
        assert!(json.contains(r#""category":"export""#));
        assert!(json.contains(r#""recoverable":false"#));
        assert!(json.contains("csv"));
    }

    #[test]
    fn test_format_error_human() {
        let err = Error::ReportNotFound { id: 42 };
        let formatted = format_error_human(&err, false);

        assert!(formatted.contains("Report Not Found"));
        assert!(formatted.contains("report not found: 42"));
    }
}
