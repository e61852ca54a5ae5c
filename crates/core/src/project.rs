//! Project records as stored in the showcase document, plus the typed view
//! rendered by the showcase grid.
//!
//! A [`ProjectRecord`] keeps the full authored JSON object so that keys the
//! store does not understand (and their order) survive every rewrite. Only
//! `id`, `images` and `thumbnailPosition` are ever touched by mutations.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::types::{MediaRef, ProjectId};

/// JSON key holding the project identifier.
pub const KEY_ID: &str = "id";

/// JSON key holding the ordered gallery.
pub const KEY_IMAGES: &str = "images";

/// JSON key holding the thumbnail crop focal point.
pub const KEY_THUMBNAIL_POSITION: &str = "thumbnailPosition";

/// Lower bound of a focal point coordinate (percent).
pub const FOCAL_MIN: f64 = 0.0;

/// Upper bound of a focal point coordinate (percent).
pub const FOCAL_MAX: f64 = 100.0;

/// Focal point used when a record has none.
pub const FOCAL_DEFAULT: f64 = 50.0;

// ---------------------------------------------------------------------------
// Thumbnail focal point
// ---------------------------------------------------------------------------

/// Percentage-based crop anchor for a thumbnail, `(0,0)` top-left to
/// `(100,100)` bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for ThumbnailPosition {
    fn default() -> Self {
        Self {
            x: FOCAL_DEFAULT,
            y: FOCAL_DEFAULT,
        }
    }
}

impl ThumbnailPosition {
    /// Check both coordinates are finite and within `[0, 100]`.
    pub fn validate(&self) -> Result<(), String> {
        for (axis, value) in [("x", self.x), ("y", self.y)] {
            if !value.is_finite() || !(FOCAL_MIN..=FOCAL_MAX).contains(&value) {
                return Err(format!(
                    "thumbnailPosition.{axis} must be a number between {FOCAL_MIN} and {FOCAL_MAX}, got {value}"
                ));
            }
        }
        Ok(())
    }

    /// JSON form written to disk. Whole numbers are written without a
    /// fractional part so `10` stays `10` rather than becoming `10.0`.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("x".to_string(), number_value(self.x));
        object.insert("y".to_string(), number_value(self.y));
        Value::Object(object)
    }
}

fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

// ---------------------------------------------------------------------------
// Stored record
// ---------------------------------------------------------------------------

/// One case study exactly as authored in the showcase document.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    id: ProjectId,
    object: Map<String, Value>,
}

impl ProjectRecord {
    /// Wrap an authored JSON object.
    ///
    /// The object must carry a non-empty string `id`, and its `images`
    /// (when present) must be an array of strings.
    pub fn from_object(object: Map<String, Value>) -> Result<Self, String> {
        let id = match object.get(KEY_ID) {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::String(_)) => return Err("project id must not be empty".to_string()),
            Some(_) => return Err("project id must be a string".to_string()),
            None => return Err("project record is missing an id".to_string()),
        };

        match object.get(KEY_IMAGES) {
            None => {}
            Some(Value::Array(items)) if items.iter().all(Value::is_string) => {}
            Some(_) => {
                return Err(format!("project '{id}' has images that are not a list of strings"));
            }
        }

        Ok(Self { id, object })
    }

    /// Wrap an arbitrary JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Object(object) => Self::from_object(object),
            other => Err(format!("project record must be an object, got {}", kind(&other))),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw access to any authored field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.object.get(key)
    }

    pub fn as_object(&self) -> &Map<String, Value> {
        &self.object
    }

    /// Ordered gallery. A record without `images` has an empty gallery.
    pub fn images(&self) -> Vec<&str> {
        match self.object.get(KEY_IMAGES) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Replace the gallery. An existing `images` key keeps its position.
    pub fn set_images(&mut self, images: Vec<MediaRef>) {
        let items = images.into_iter().map(Value::String).collect();
        self.object.insert(KEY_IMAGES.to_string(), Value::Array(items));
    }

    pub fn set_thumbnail_position(&mut self, position: ThumbnailPosition) {
        self.object
            .insert(KEY_THUMBNAIL_POSITION.to_string(), position.to_value());
    }

    /// Shallow-merge `patch` over this record.
    pub fn apply(&mut self, patch: &RecordPatch) {
        if let Some(position) = patch.thumbnail_position {
            self.set_thumbnail_position(position);
        }
    }

    /// Typed view for the showcase grid.
    pub fn to_project(&self) -> Result<Project, String> {
        serde_json::from_value(Value::Object(self.object.clone()))
            .map_err(|e| format!("project '{}' has invalid display fields: {e}", self.id))
    }
}

impl Serialize for ProjectRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.object.serialize(serializer)
    }
}

/// Display fields a single-record patch may change.
///
/// Every field is optional; absent fields leave the record untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub thumbnail_position: Option<ThumbnailPosition>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.thumbnail_position.is_none()
    }
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Typed view
// ---------------------------------------------------------------------------

/// A headline figure shown on the project detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// An outbound link shown on the project detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Read-only view of a project as the showcase renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub thumbnail_position: ThumbnailPosition,
    #[serde(default)]
    pub images: Vec<MediaRef>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<Stat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
