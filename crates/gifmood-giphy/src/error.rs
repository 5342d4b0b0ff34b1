use thiserror::Error;

/// Errors returned by the Giphy API client.
///
/// The fetch pipeline never surfaces these to its callers; they are logged and
/// replaced with substitute data.
#[derive(Debug, Error)]
pub enum GiphyError {
    /// Network, TLS or timeout failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// A raw provider record that cannot be turned into a `MediaItem`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedItem {
    #[error("GIF {id} has no original image variant")]
    MissingOriginal { id: String },

    #[error("GIF {id} has unusable {field} {value}")]
    InvalidDimension {
        id: String,
        field: &'static str,
        value: String,
    },
}
