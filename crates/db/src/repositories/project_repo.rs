//! Repository for the projects showcase document.
//!
//! Every mutation validates its request, loads the whole collection, applies
//! the change in memory and saves the whole collection. Nothing is saved
//! unless the next collection was computed successfully.

use folio_core::project::Project;
use folio_core::requests::{PatchProject, ReorderImages, ReorderProjects};
use folio_core::types::{MediaRef, ProjectId};

use crate::error::StoreError;
use crate::storage::ProjectStorage;

/// Provides the authoring operations for the project collection.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Load the collection as typed showcase views, in display order.
    pub async fn list(storage: &dyn ProjectStorage) -> Result<Vec<Project>, StoreError> {
        let collection = storage.load().await?;
        collection.to_projects().map_err(StoreError::Malformed)
    }

    /// Reorder the collection and optionally remove one project.
    ///
    /// Returns the persisted id order.
    pub async fn reorder(
        storage: &dyn ProjectStorage,
        input: &ReorderProjects,
    ) -> Result<Vec<ProjectId>, StoreError> {
        input.validate()?;

        let mut collection = storage.load().await?;
        let before = collection.len();
        let ids = collection.reorder(&input.ordered_ids, input.remove_id.as_deref());
        storage.save(&collection).await?;

        tracing::info!(
            storage = %storage.describe(),
            removed = before - ids.len(),
            remove_id = input.remove_id.as_deref().unwrap_or_default(),
            order = ?ids,
            "Projects reordered",
        );
        Ok(ids)
    }

    /// Reorder the gallery of one project.
    ///
    /// Returns the persisted image order.
    pub async fn reorder_images(
        storage: &dyn ProjectStorage,
        input: &ReorderImages,
    ) -> Result<Vec<MediaRef>, StoreError> {
        input.validate()?;

        let mut collection = storage.load().await?;
        let images = collection.reorder_images(&input.project_id, &input.images)?;
        storage.save(&collection).await?;

        tracing::info!(
            storage = %storage.describe(),
            project_id = %input.project_id,
            images = images.len(),
            "Project images reordered",
        );
        Ok(images)
    }

    /// Patch display fields of one project. Returns the patched id.
    pub async fn patch(
        storage: &dyn ProjectStorage,
        input: &PatchProject,
    ) -> Result<ProjectId, StoreError> {
        input.validate()?;

        let mut collection = storage.load().await?;
        collection.patch(&input.update_project_id, &input.to_patch())?;
        storage.save(&collection).await?;

        tracing::info!(
            storage = %storage.describe(),
            project_id = %input.update_project_id,
            thumbnail_position = ?input.thumbnail_position,
            "Project patched",
        );
        Ok(input.update_project_id.clone())
    }
}
