//! Persistence for the project showcase document.
//!
//! All reads and writes go through [`ProjectStorage`], which loads and saves
//! the whole collection at once. [`repositories::ProjectRepo`] builds the
//! read-modify-write operations on top of it.

use std::path::PathBuf;
use std::sync::Arc;

pub mod document;
pub mod error;
pub mod json_file;
pub mod memory;
pub mod repositories;
pub mod storage;

pub use error::StoreError;
pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use storage::ProjectStorage;

/// Shared handle to the configured storage backend.
pub type SharedStorage = Arc<dyn ProjectStorage>;

/// Open the JSON document at `path`. The file is not touched until the
/// first load or save.
pub fn open_json_file(path: impl Into<PathBuf>) -> SharedStorage {
    Arc::new(JsonFileStorage::new(path))
}

/// Verify the document can be read and parsed.
pub async fn health_check(storage: &dyn ProjectStorage) -> Result<(), StoreError> {
    storage.load().await.map(|_| ())
}
