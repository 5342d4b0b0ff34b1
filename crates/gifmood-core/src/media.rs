use serde::{Deserialize, Serialize};

/// Normalized GIF returned to callers. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub preview_url: String,
    pub width: u32,
    pub height: u32,
}

impl MediaItem {
    pub const DEFAULT_ID: &'static str = "unknown";
    pub const DEFAULT_TITLE: &'static str = "Untitled GIF";
    pub const DEFAULT_WIDTH: u32 = 480;
    pub const DEFAULT_HEIGHT: u32 = 270;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_snake_case_fields() {
        let item = MediaItem {
            id: "abc".to_string(),
            title: "Wave".to_string(),
            url: "https://media.example/abc.gif".to_string(),
            preview_url: "https://media.example/abc-preview.gif".to_string(),
            width: 480,
            height: 270,
        };
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["preview_url"], "https://media.example/abc-preview.gif");
        assert_eq!(json["width"], 480);
        assert_eq!(json["height"], 270);
    }
}
