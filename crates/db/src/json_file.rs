use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::collection::ProjectCollection;

use crate::document;
use crate::error::StoreError;
use crate::storage::ProjectStorage;

/// Stores the collection as a single pretty-printed JSON file.
///
/// Every save writes its own staging file next to the document and renames
/// it over the document, so a reader sees either the old or the new
/// document in full. Overlapping saves are last-writer-wins.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the document and its staging files.
    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Write `text` to a fresh staging file in `dir` and move it over `path`.
fn replace_file(dir: &Path, path: &Path, text: &[u8]) -> Result<(), StoreError> {
    std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

    let mut staging = tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    let written = staging.write_all(text).and_then(|()| staging.flush());
    written.map_err(|e| StoreError::io(staging.path(), e))?;

    // Staging files are created owner-only; keep the document's own mode.
    if let Ok(existing) = std::fs::metadata(path) {
        staging
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| StoreError::io(staging.path(), e))?;
    }

    // A failed persist drops the staging file, which deletes it.
    staging
        .persist(path)
        .map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}

#[async_trait]
impl ProjectStorage for JsonFileStorage {
    async fn load(&self) -> Result<ProjectCollection, StoreError> {
        let text = tokio::fs::read_to_string(self.path())
            .await
            .map_err(|e| StoreError::io(self.path(), e))?;
        document::decode(&text)
    }

    async fn save(&self, collection: &ProjectCollection) -> Result<(), StoreError> {
        let text = document::encode(collection)?;
        let bytes = text.len();

        let dir = self.dir();
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || replace_file(&dir, &path, text.as_bytes()))
            .await
            .map_err(|e| StoreError::io(self.path(), std::io::Error::other(e)))??;

        tracing::debug!(
            path = %self.path().display(),
            projects = collection.len(),
            bytes,
            "Projects document written",
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}
