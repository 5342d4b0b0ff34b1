//! Giphy API response types.
//!
//! Only the fields the reconciler reads are modelled. Everything is optional
//! because the provider omits fields freely; the reconciler decides which
//! gaps get defaults and which make an item unusable.

use std::collections::HashMap;

use serde::Deserialize;

/// Envelope shared by the `search` and `trending` endpoints: `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

/// One GIF as the provider describes it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMediaItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Rendition name (`original`, `preview_gif`, `fixed_width_small`, ...) to
    /// its raw JSON. Renditions are decoded on lookup so a garbled one never
    /// sinks the whole record.
    #[serde(default)]
    pub images: Option<HashMap<String, serde_json::Value>>,
}

/// A single rendition of a GIF.
///
/// `width` and `height` arrive as strings (`"480"`) from Giphy but some
/// mirrors send numbers, so both are kept as raw JSON values. `url` is raw
/// too; anything but a string reads as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageVariant {
    #[serde(default)]
    pub url: Option<serde_json::Value>,
    #[serde(default)]
    pub width: Option<serde_json::Value>,
    #[serde(default)]
    pub height: Option<serde_json::Value>,
}

impl ImageVariant {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_ref()?.as_str()
    }
}

impl RawMediaItem {
    /// Decodes the named rendition. `None` when it is absent or not an object.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<ImageVariant> {
        let value = self.images.as_ref()?.get(name)?;
        ImageVariant::deserialize(value).ok()
    }
}
