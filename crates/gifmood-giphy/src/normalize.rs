//! Reconciliation of raw Giphy records into [`MediaItem`]s.

use gifmood_core::MediaItem;
use serde_json::Value;

use crate::error::MalformedItem;
use crate::types::RawMediaItem;

/// Preview renditions, in order of preference.
const PREVIEW_VARIANTS: [&str; 2] = ["preview_gif", "fixed_width_small"];

/// Converts a raw provider record into a fully populated [`MediaItem`].
///
/// Missing id, title, url and dimensions fall back to defaults. The item is
/// rejected only when the `original` rendition is absent or one of its
/// dimensions is present but not a positive integer.
///
/// # Errors
///
/// - [`MalformedItem::MissingOriginal`] when there is no `original` variant.
/// - [`MalformedItem::InvalidDimension`] for non-numeric or non-positive sizes.
pub fn normalize_item(raw: &RawMediaItem) -> Result<MediaItem, MalformedItem> {
    let id = non_blank(raw.id.as_deref())
        .unwrap_or(MediaItem::DEFAULT_ID)
        .to_owned();
    let title = non_blank(raw.title.as_deref())
        .unwrap_or(MediaItem::DEFAULT_TITLE)
        .to_owned();

    let Some(original) = raw.variant("original") else {
        return Err(MalformedItem::MissingOriginal { id });
    };

    let url = original.url().unwrap_or_default().to_owned();
    let preview_url = PREVIEW_VARIANTS
        .iter()
        .filter_map(|name| raw.variant(name))
        .find_map(|variant| non_blank(variant.url()).map(ToOwned::to_owned))
        .unwrap_or_else(|| url.clone());

    let width = dimension(
        &id,
        "width",
        original.width.as_ref(),
        MediaItem::DEFAULT_WIDTH,
    )?;
    let height = dimension(
        &id,
        "height",
        original.height.as_ref(),
        MediaItem::DEFAULT_HEIGHT,
    )?;

    Ok(MediaItem {
        id,
        title,
        url,
        preview_url,
        width,
        height,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn dimension(
    id: &str,
    field: &'static str,
    raw: Option<&Value>,
    default: u32,
) -> Result<u32, MalformedItem> {
    match raw {
        None | Some(Value::Null) => Ok(default),
        Some(value) => parse_dimension(value).ok_or_else(|| MalformedItem::InvalidDimension {
            id: id.to_owned(),
            field,
            value: value.to_string(),
        }),
    }
}

/// Giphy sends sizes as decimal strings; numbers are accepted as well.
fn parse_dimension(value: &Value) -> Option<u32> {
    let parsed = match value {
        Value::String(s) => s.trim().parse::<u32>().ok(),
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        _ => None,
    };
    parsed.filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: serde_json::Value) -> RawMediaItem {
        serde_json::from_value(value).expect("raw item should deserialize")
    }

    #[test]
    fn minimal_item_gets_defaults() {
        let item = normalize_item(&raw(json!({
            "id": "x",
            "images": { "original": { "url": "u", "width": "480", "height": "270" } }
        })))
        .unwrap();

        assert_eq!(
            item,
            MediaItem {
                id: "x".to_string(),
                title: "Untitled GIF".to_string(),
                url: "u".to_string(),
                preview_url: "u".to_string(),
                width: 480,
                height: 270,
            }
        );
    }

    #[test]
    fn prefers_preview_gif_over_fixed_width_small() {
        let item = normalize_item(&raw(json!({
            "id": "abc",
            "title": "Party Parrot",
            "images": {
                "original": { "url": "orig.gif", "width": "320", "height": "240" },
                "fixed_width_small": { "url": "small.gif" },
                "preview_gif": { "url": "preview.gif" }
            }
        })))
        .unwrap();
        assert_eq!(item.title, "Party Parrot");
        assert_eq!(item.preview_url, "preview.gif");
        assert_eq!((item.width, item.height), (320, 240));
    }

    #[test]
    fn falls_back_to_fixed_width_small() {
        let item = normalize_item(&raw(json!({
            "id": "abc",
            "images": {
                "original": { "url": "orig.gif" },
                "preview_gif": { "url": "" },
                "fixed_width_small": { "url": "small.gif" }
            }
        })))
        .unwrap();
        assert_eq!(item.preview_url, "small.gif");
    }

    #[test]
    fn garbled_preview_falls_back_to_primary_url() {
        let item = normalize_item(&raw(serde_json::json!({
            "id": "g",
            "images": {
                "original": { "url": "orig.gif", "width": "320", "height": "240" },
                "preview_gif": { "url": 5 },
                "fixed_width_small": "not-an-object"
            }
        })))
        .unwrap();
        assert_eq!(item.url, "orig.gif");
        assert_eq!(item.preview_url, "orig.gif");
        assert_eq!((item.width, item.height), (320, 240));
    }

    #[test]
    fn garbled_preview_skips_to_next_rendition() {
        let item = normalize_item(&raw(serde_json::json!({
            "id": "g",
            "images": {
                "original": { "url": "orig.gif" },
                "preview_gif": { "url": ["x"] },
                "fixed_width_small": { "url": "small.gif" }
            }
        })))
        .unwrap();
        assert_eq!(item.preview_url, "small.gif");
    }

    #[test]
    fn missing_id_title_and_sizes_use_defaults() {
        let item = normalize_item(&raw(json!({
            "title": "",
            "images": { "original": { "url": "orig.gif", "width": null } }
        })))
        .unwrap();
        assert_eq!(item.id, "unknown");
        assert_eq!(item.title, "Untitled GIF");
        assert_eq!((item.width, item.height), (480, 270));
    }

    #[test]
    fn original_without_url_yields_empty_url() {
        let item = normalize_item(&raw(json!({
            "id": "nourl",
            "images": { "original": { "width": 100, "height": 50 } }
        })))
        .unwrap();
        assert_eq!(item.url, "");
        assert_eq!(item.preview_url, "");
        assert_eq!((item.width, item.height), (100, 50));
    }

    #[test]
    fn missing_original_is_malformed() {
        let err = normalize_item(&raw(json!({
            "id": "y",
            "title": "No original",
            "images": { "preview_gif": { "url": "p.gif" } }
        })))
        .unwrap_err();
        assert_eq!(
            err,
            MalformedItem::MissingOriginal {
                id: "y".to_string()
            }
        );
    }

    #[test]
    fn missing_images_map_is_malformed() {
        let result = normalize_item(&raw(json!({ "id": "z", "images": null })));
        assert!(matches!(result, Err(MalformedItem::MissingOriginal { .. })));
    }

    #[test]
    fn non_numeric_dimension_is_malformed() {
        let err = normalize_item(&raw(json!({
            "id": "w",
            "images": { "original": { "url": "u", "width": "wide", "height": "270" } }
        })))
        .unwrap_err();
        assert!(
            matches!(err, MalformedItem::InvalidDimension { field: "width", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn zero_or_negative_dimension_is_malformed() {
        for bad in [json!("0"), json!(-4), json!(1.5), json!(true)] {
            let result = normalize_item(&raw(json!({
                "id": "h",
                "images": { "original": { "url": "u", "width": "10", "height": bad } }
            })));
            assert!(
                matches!(result, Err(MalformedItem::InvalidDimension { field: "height", .. })),
                "expected malformed height, got {result:?}"
            );
        }
    }

    #[test]
    fn padded_numeric_strings_are_accepted() {
        let item = normalize_item(&raw(json!({
            "id": "p",
            "images": { "original": { "url": "u", "width": " 498 ", "height": "280" } }
        })))
        .unwrap();
        assert_eq!((item.width, item.height), (498, 280));
    }
}
