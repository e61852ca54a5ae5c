use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use folio_core::collection::ProjectCollection;
use tokio::sync::Mutex;

use crate::document;
use crate::error::StoreError;
use crate::storage::ProjectStorage;

/// In-process storage holding the encoded document text.
///
/// Goes through the same encode/decode path as [`crate::JsonFileStorage`],
/// which makes it a faithful stand-in for tests and an example of swapping
/// the backend behind [`ProjectStorage`].
#[derive(Debug)]
pub struct MemoryStorage {
    text: Mutex<String>,
    writes: AtomicUsize,
    read_only: bool,
}

impl MemoryStorage {
    /// Start from raw document text (which may be malformed).
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(text.into()),
            writes: AtomicUsize::new(0),
            read_only: false,
        }
    }

    /// Reject every save with a permission error.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Current document text.
    pub async fn contents(&self) -> String {
        self.text.lock().await.clone()
    }

    /// Number of successful saves.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectStorage for MemoryStorage {
    async fn load(&self) -> Result<ProjectCollection, StoreError> {
        let text = self.text.lock().await;
        document::decode(&text)
    }

    async fn save(&self, collection: &ProjectCollection) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::io(
                self.describe(),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "storage is read-only"),
            ));
        }
        let encoded = document::encode(collection)?;
        *self.text.lock().await = encoded;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
