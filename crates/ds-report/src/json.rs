//! JSON encoder.
//!
//! Pretty-printed with serde's default two-space indent. Output parses back
//! into [`ReportDocument`] without loss; floats get native serialization
//! with no extra rounding.

use crate::document::ReportDocument;
use crate::Result;

/// Serialize the document to pretty-printed JSON bytes.
pub fn encode(doc: &ReportDocument) -> Result<Vec<u8>> {
    let json = serde_json::to_string_pretty(doc)?;
    Ok(json.into_bytes())
}
