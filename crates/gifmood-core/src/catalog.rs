//! Built-in data served without touching the provider: the emotion
//! suggestions and the substitute GIFs used in demo mode and on upstream
//! failure.

use std::sync::LazyLock;

use crate::media::MediaItem;

/// Suggested keywords, in display order.
pub const EMOTIONS: [&str; 18] = [
    "happy",
    "sad",
    "excited",
    "angry",
    "surprised",
    "confused",
    "love",
    "laugh",
    "cry",
    "dance",
    "celebrate",
    "tired",
    "shocked",
    "nervous",
    "proud",
    "grateful",
    "silly",
    "cool",
];

static SUBSTITUTES: LazyLock<[MediaItem; 3]> = LazyLock::new(|| {
    [
        substitute(
            "demo1",
            "Happy Dance",
            "https://media.giphy.com/media/l0MYt5jPR6QX5pnqM/giphy.gif",
            "https://media.giphy.com/media/l0MYt5jPR6QX5pnqM/200w.gif",
        ),
        substitute(
            "demo2",
            "Excited Celebration",
            "https://media.giphy.com/media/26u4cqiYI30juCOGY/giphy.gif",
            "https://media.giphy.com/media/26u4cqiYI30juCOGY/200w.gif",
        ),
        substitute(
            "demo3",
            "Thumbs Up",
            "https://media.giphy.com/media/111ebonMs90YLu/giphy.gif",
            "https://media.giphy.com/media/111ebonMs90YLu/200w.gif",
        ),
    ]
});

fn substitute(id: &str, title: &str, url: &str, preview_url: &str) -> MediaItem {
    MediaItem {
        id: id.to_owned(),
        title: title.to_owned(),
        url: url.to_owned(),
        preview_url: preview_url.to_owned(),
        width: MediaItem::DEFAULT_WIDTH,
        height: MediaItem::DEFAULT_HEIGHT,
    }
}

/// The emotion suggestions as owned strings, ready to serialize.
#[must_use]
pub fn emotion_catalog() -> Vec<String> {
    EMOTIONS.iter().map(|e| (*e).to_owned()).collect()
}

/// The fixed, ordered substitute set.
#[must_use]
pub fn substitute_set() -> &'static [MediaItem] {
    SUBSTITUTES.as_slice()
}
