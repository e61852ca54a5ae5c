use std::path::PathBuf;

use folio_core::error::CoreError;

/// Errors surfaced by the storage layer and the repositories built on it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain-level error (validation, unknown id).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The document could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document was read but is not a valid projects collection.
    #[error("Malformed projects document: {0}")]
    Malformed(String),

    /// The collection could not be encoded.
    #[error("Failed to encode projects document: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
