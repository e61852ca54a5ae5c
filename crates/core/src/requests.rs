//! Request payloads for the local authoring endpoints and their field rules.
//!
//! Decoding (shape and JSON types) is done by serde; the `validate` methods
//! add the rules serde cannot express. Both run before any storage access.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::CoreError;
use crate::project::{kind, RecordPatch, ThumbnailPosition};
use crate::types::{MediaRef, ProjectId};

/// Key whose presence selects a single-record patch on the projects endpoint.
pub const KEY_UPDATE_PROJECT_ID: &str = "updateProjectId";

/// Optional field that may be omitted but never sent as `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Reorder the whole collection, optionally removing one project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderProjects {
    pub ordered_ids: Vec<ProjectId>,
    #[serde(default, deserialize_with = "present")]
    pub remove_id: Option<ProjectId>,
}

impl ReorderProjects {
    pub fn validate(&self) -> Result<(), CoreError> {
        if matches!(self.remove_id.as_deref(), Some("")) {
            return Err(CoreError::Validation(
                "removeId must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }
}

/// Patch the display fields of a single project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchProject {
    pub update_project_id: ProjectId,
    #[serde(default, deserialize_with = "present")]
    pub thumbnail_position: Option<ThumbnailPosition>,
}

impl PatchProject {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.update_project_id.is_empty() {
            return Err(CoreError::Validation(
                "updateProjectId must be a non-empty string".to_string(),
            ));
        }
        if let Some(position) = &self.thumbnail_position {
            position.validate().map_err(CoreError::Validation)?;
        }
        Ok(())
    }

    pub fn to_patch(&self) -> RecordPatch {
        RecordPatch {
            thumbnail_position: self.thumbnail_position,
        }
    }
}

/// Reorder the gallery of one project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderImages {
    pub project_id: ProjectId,
    pub images: Vec<MediaRef>,
}

impl ReorderImages {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.project_id.is_empty() {
            return Err(CoreError::Validation(
                "projectId must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }
}

/// The two commands accepted by the projects endpoint.
#[derive(Debug, Clone)]
pub enum ProjectCommand {
    Reorder(ReorderProjects),
    Patch(PatchProject),
}

impl ProjectCommand {
    /// Decode a request body. A body carrying `updateProjectId` is a patch;
    /// anything else is a reorder.
    pub fn from_value(body: Value) -> Result<Self, String> {
        let is_patch = match &body {
            Value::Object(object) => object.contains_key(KEY_UPDATE_PROJECT_ID),
            other => return Err(format!("request body must be an object, got {}", kind(other))),
        };

        if is_patch {
            serde_json::from_value(body)
                .map(Self::Patch)
                .map_err(|e| format!("invalid patch request: {e}"))
        } else {
            serde_json::from_value(body)
                .map(Self::Reorder)
                .map_err(|e| format!("invalid reorder request: {e}"))
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::Reorder(req) => req.validate(),
            Self::Patch(req) => req.validate(),
        }
    }
}
