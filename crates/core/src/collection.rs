//! The ordered, id-unique project collection and its three mutations.
//!
//! Mutations run in memory on a collection the caller owns. A failed
//! mutation leaves the collection as it was, so the caller can simply drop
//! it without persisting anything.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::ordering::{resolve_image_order, resolve_project_order};
use crate::project::{kind, Project, ProjectRecord, RecordPatch};

/// Entity name used in `NotFound` errors.
pub const ENTITY_PROJECT: &str = "Project";

/// Ordered sequence of project records, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProjectCollection {
    records: Vec<ProjectRecord>,
}

impl ProjectCollection {
    /// Build a collection, rejecting duplicate ids.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self, String> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(format!("duplicate project id '{}'", record.id()));
            }
        }
        Ok(Self { records })
    }

    /// Parse a whole showcase document: a JSON array of project objects.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(format!(
                    "projects document must be an array, got {}",
                    kind(&other)
                ))
            }
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                ProjectRecord::from_value(item).map_err(|e| format!("entry {index}: {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(records)
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids in display order.
    pub fn ids(&self) -> Vec<String> {
        self.records.iter().map(|r| r.id().to_string()).collect()
    }

    pub fn find(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut ProjectRecord, CoreError> {
        self.records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: ENTITY_PROJECT,
                id: id.to_string(),
            })
    }

    /// Typed views in display order.
    pub fn to_projects(&self) -> Result<Vec<Project>, String> {
        self.records.iter().map(ProjectRecord::to_project).collect()
    }

    /// Reorder the collection and optionally drop one record.
    ///
    /// Unknown ids in `ordered_ids` and an unknown `remove_id` are ignored.
    /// Records missing from `ordered_ids` keep their relative order at the
    /// end. Returns the resulting id order.
    pub fn reorder<S: AsRef<str>>(&mut self, ordered_ids: &[S], remove_id: Option<&str>) -> Vec<String> {
        let next_ids = resolve_project_order(&self.ids(), ordered_ids);

        let mut by_id: HashMap<String, ProjectRecord> = self
            .records
            .drain(..)
            .map(|r| (r.id().to_string(), r))
            .collect();

        self.records = next_ids
            .iter()
            .filter_map(|id| by_id.remove(id))
            .collect();

        if let Some(remove_id) = remove_id {
            self.records.retain(|r| r.id() != remove_id);
        }

        self.ids()
    }

    /// Reorder one project's gallery. Returns the authoritative order.
    pub fn reorder_images<S: AsRef<str>>(
        &mut self,
        project_id: &str,
        images: &[S],
    ) -> Result<Vec<String>, CoreError> {
        let record = self.find_mut(project_id)?;
        let next = resolve_image_order(&record.images(), images);
        record.set_images(next.clone());
        Ok(next)
    }

    /// Shallow-merge `patch` over one record.
    pub fn patch(&mut self, project_id: &str, patch: &RecordPatch) -> Result<(), CoreError> {
        let record = self.find_mut(project_id)?;
        record.apply(patch);
        Ok(())
    }
}
