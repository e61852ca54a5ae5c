use async_trait::async_trait;
use folio_core::collection::ProjectCollection;

use crate::error::StoreError;

/// Whole-document storage for the project collection.
///
/// Implementations never expose partial state: `save` either replaces the
/// stored document completely or leaves it as it was.
#[async_trait]
pub trait ProjectStorage: Send + Sync {
    /// Read and parse the whole collection.
    async fn load(&self) -> Result<ProjectCollection, StoreError>;

    /// Replace the whole collection.
    async fn save(&self, collection: &ProjectCollection) -> Result<(), StoreError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}
