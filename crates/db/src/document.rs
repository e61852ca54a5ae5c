//! On-disk encoding of the projects document.
//!
//! Pretty-printed JSON with 2-space indentation and a trailing newline so
//! the committed file diffs cleanly.

use folio_core::collection::ProjectCollection;

use crate::error::StoreError;

/// Encode a collection as document text.
pub fn encode(collection: &ProjectCollection) -> Result<String, StoreError> {
    let mut text = serde_json::to_string_pretty(collection)?;
    text.push('\n');
    Ok(text)
}

/// Parse document text into a collection.
pub fn decode(text: &str) -> Result<ProjectCollection, StoreError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| StoreError::Malformed(e.to_string()))?;
    ProjectCollection::from_value(value).map_err(StoreError::Malformed)
}
