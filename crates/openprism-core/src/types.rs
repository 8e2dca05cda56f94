//! Descriptor and request types
//!
//! Descriptors are opaque attribute mappings produced by the external core
//! and consumed read-only here. Requests carry the parameters forwarded to
//! the core's path-generation calls.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Scene file descriptor produced by the core for a tracked scene path.
///
/// The attribute set is owned by the core; this wrapper only offers typed
/// access to the fields the API itself reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneFileData(Map<String, Value>);

impl SceneFileData {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }

    /// Generic string-attribute accessor.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The task this scene belongs to, when the core recorded one.
    pub fn task(&self) -> Option<&str> {
        self.get_str("task")
    }

    /// The department this scene belongs to, when the core recorded one.
    pub fn department(&self) -> Option<&str> {
        self.get_str("department")
    }

    /// Consume the wrapper and return the raw attribute map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for SceneFileData {
    fn from(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }
}

/// Export descriptor produced by the core for a product, media, or playblast
/// path-generation request. Contains at least a `"path"` entry on success.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportDetails(Map<String, Value>);

impl ExportDetails {
    pub fn new(details: Map<String, Value>) -> Self {
        Self(details)
    }

    /// The resolved file-system path, as the core produced it. Separator
    /// normalization happens in the accessor, not here.
    pub fn path(&self) -> Option<&str> {
        self.0.get("path").and_then(Value::as_str)
    }

    /// Generic string-attribute accessor.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Consume the wrapper and return the raw detail map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ExportDetails {
    fn from(details: Map<String, Value>) -> Self {
        Self(details)
    }
}

/// Start and end frames of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    pub start: i32,
    pub end: i32,
}

impl FrameRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }
}

/// Media categories a master-version update can be scoped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Playblasts,
    #[serde(rename = "2drenders")]
    TwoDRenders,
}

impl MediaType {
    /// The identifier the core expects for this media category.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Playblasts => "playblasts",
            MediaType::TwoDRenders => "2drenders",
        }
    }
}

/// Parameters for a product path-generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRequest {
    /// Product name shown in Prism.
    pub identifier: String,
    /// File extension, including the dot (e.g. `.abc`).
    pub extension: String,
    #[serde(default)]
    pub frame_range: Option<FrameRange>,
    #[serde(default)]
    pub comment: Option<String>,
    /// Named export location the product should be created in.
    #[serde(default)]
    pub location: Option<String>,
}

impl ProductRequest {
    pub fn new(identifier: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            extension: extension.into(),
            frame_range: None,
            comment: None,
            location: None,
        }
    }

    pub fn frame_range(mut self, start: i32, end: i32) -> Self {
        self.frame_range = Some(FrameRange::new(start, end));
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Parameters for a media or playblast path-generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRequest {
    /// Media product name shown in Prism.
    pub identifier: String,
    /// File extension, including the dot (e.g. `.exr`).
    pub extension: String,
    #[serde(default)]
    pub comment: Option<String>,
    /// Named export location the media should be created in.
    #[serde(default)]
    pub location: Option<String>,
}

impl MediaRequest {
    pub fn new(identifier: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            extension: extension.into(),
            comment: None,
            location: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scene_map() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("task".to_string(), json!("animation"));
        map.insert("department".to_string(), json!("anm"));
        map.insert("version".to_string(), json!(12));
        map
    }

    #[test]
    fn test_scene_file_data_accessors() {
        let data = SceneFileData::new(scene_map());
        assert_eq!(data.task(), Some("animation"));
        assert_eq!(data.department(), Some("anm"));
        assert_eq!(data.get_str("missing"), None);
        // Non-string attributes are not surfaced through string accessors
        assert_eq!(data.get_str("version"), None);
    }

    #[test]
    fn test_export_details_path() {
        let mut map = Map::new();
        map.insert("path".to_string(), json!("P:\\proj\\export\\v001\\cache.abc"));
        let details = ExportDetails::new(map);
        assert_eq!(details.path(), Some("P:\\proj\\export\\v001\\cache.abc"));
    }

    #[test]
    fn test_export_details_missing_path() {
        let details = ExportDetails::default();
        assert_eq!(details.path(), None);
    }

    #[test]
    fn test_media_type_identifiers() {
        assert_eq!(MediaType::Playblasts.as_str(), "playblasts");
        assert_eq!(MediaType::TwoDRenders.as_str(), "2drenders");
    }

    #[test]
    fn test_product_request_builder() {
        let req = ProductRequest::new("geoCache", ".abc")
            .frame_range(1001, 1050)
            .comment("blocking pass")
            .location("global");

        assert_eq!(req.identifier, "geoCache");
        assert_eq!(req.extension, ".abc");
        assert_eq!(req.frame_range, Some(FrameRange::new(1001, 1050)));
        assert_eq!(req.comment.as_deref(), Some("blocking pass"));
        assert_eq!(req.location.as_deref(), Some("global"));
    }

    #[test]
    fn test_media_request_defaults() {
        let req = MediaRequest::new("beauty", ".exr");
        assert_eq!(req.comment, None);
        assert_eq!(req.location, None);
    }

    #[test]
    fn test_scene_file_data_serde() {
        let data = SceneFileData::new(scene_map());
        let round: SceneFileData =
            serde_json::from_str(&serde_json::to_string(&data).unwrap()).unwrap();
        assert_eq!(round, data);
    }
}
