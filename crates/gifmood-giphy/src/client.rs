//! HTTP client for the Giphy `search` and `trending` endpoints.
//!
//! Wraps `reqwest` with Giphy-specific URL building and per-item decoding.
//! The API key is passed on every call rather than stored, so the caller
//! decides per request whether live mode is available.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GiphyError;
use crate::types::{ListResponse, RawMediaItem};

pub const DEFAULT_BASE_URL: &str = "https://api.giphy.com/v1/gifs";
pub const DEFAULT_RATING: &str = "pg-13";
pub const DEFAULT_LANG: &str = "en";

/// Client for the Giphy REST API.
///
/// Use [`GiphyClient::new`] for production or [`GiphyClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct GiphyClient {
    client: Client,
    base_url: Url,
    rating: String,
    lang: String,
}

impl GiphyClient {
    /// Creates a new client pointed at the production Giphy API.
    ///
    /// # Errors
    ///
    /// Returns [`GiphyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, GiphyError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GiphyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GiphyError::InvalidBaseUrl`] if `base_url`
    /// cannot be parsed as a hierarchical URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GiphyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so joining "search" appends a segment
        // instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| GiphyError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(GiphyError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            rating: DEFAULT_RATING.to_owned(),
            lang: DEFAULT_LANG.to_owned(),
        })
    }

    /// Sets the content rating ceiling sent with every request.
    #[must_use]
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    /// Sets the language hint sent with search requests.
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Searches GIFs matching `query`.
    ///
    /// # Errors
    ///
    /// - [`GiphyError::Http`] on network failure, timeout or non-2xx status.
    /// - [`GiphyError::Deserialize`] if the envelope is not `{ "data": [...] }`.
    pub async fn search(
        &self,
        api_key: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<RawMediaItem>, GiphyError> {
        let limit = limit.to_string();
        let url = self.build_url(
            "search",
            api_key,
            &[
                ("q", query),
                ("limit", limit.as_str()),
                ("rating", self.rating.as_str()),
                ("lang", self.lang.as_str()),
            ],
        )?;
        self.request_list(url, &format!("search(q={query})")).await
    }

    /// Fetches the currently trending GIFs.
    ///
    /// # Errors
    ///
    /// - [`GiphyError::Http`] on network failure, timeout or non-2xx status.
    /// - [`GiphyError::Deserialize`] if the envelope is not `{ "data": [...] }`.
    pub async fn trending(
        &self,
        api_key: &str,
        limit: u32,
    ) -> Result<Vec<RawMediaItem>, GiphyError> {
        let limit_param = limit.to_string();
        let url = self.build_url(
            "trending",
            api_key,
            &[
                ("limit", limit_param.as_str()),
                ("rating", self.rating.as_str()),
            ],
        )?;
        self.request_list(url, &format!("trending(limit={limit})"))
            .await
    }

    /// Builds the full request URL with percent-encoded query parameters.
    fn build_url(
        &self,
        endpoint: &str,
        api_key: &str,
        extra: &[(&str, &str)],
    ) -> Result<Url, GiphyError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| GiphyError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx status and decodes the `data` array.
    ///
    /// Entries that do not match [`RawMediaItem`] are skipped; the envelope
    /// itself must decode. URLs are stripped from transport errors because
    /// they carry the API key.
    async fn request_list(
        &self,
        url: Url,
        context: &str,
    ) -> Result<Vec<RawMediaItem>, GiphyError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GiphyError::Http(e.without_url()))?;
        let response = response
            .error_for_status()
            .map_err(|e| GiphyError::Http(e.without_url()))?;
        let body = response
            .text()
            .await
            .map_err(|e| GiphyError::Http(e.without_url()))?;

        let envelope: ListResponse =
            serde_json::from_str(&body).map_err(|e| GiphyError::Deserialize {
                context: context.to_owned(),
                source: e,
            })?;

        let total = envelope.data.len();
        let items: Vec<RawMediaItem> = envelope
            .data
            .into_iter()
            .filter_map(|v| serde_json::from_value::<RawMediaItem>(v).ok())
            .collect();
        if items.len() < total {
            tracing::debug!(
                context,
                skipped = total - items.len(),
                "skipped Giphy entries with unexpected shape"
            );
        }

        Ok(items)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
