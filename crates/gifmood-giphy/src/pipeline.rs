//! The fetch-and-fallback pipeline.
//!
//! Keyword normalization → Giphy query (search, then trending) → reconciliation.
//! Every upstream failure and every unusable record degrades to the built-in
//! substitute set; the only error a caller can see is an empty keyword.

use gifmood_core::{substitute_set, AppConfig, Credential, Keyword, KeywordError, MediaItem};
use rand::seq::IndexedRandom;

use crate::client::GiphyClient;
use crate::error::GiphyError;
use crate::normalize::normalize_item;
use crate::types::RawMediaItem;

/// Upper bound on results requested from Giphy in a single call.
pub const MAX_LIMIT: u32 = 25;

/// Trending batch size when the caller does not ask for one.
pub const DEFAULT_TRENDING_LIMIT: i64 = 10;

/// Where a pipeline result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Live,
    Substituted,
}

impl Source {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Live => "live",
            Source::Substituted => "substitute",
        }
    }
}

/// A pipeline result tagged with its [`Source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Fetched<T> {
    fn live(value: T) -> Self {
        Self {
            value,
            source: Source::Live,
        }
    }

    fn substituted(value: T) -> Self {
        Self {
            value,
            source: Source::Substituted,
        }
    }
}

/// Operating mode, derived from the credential on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Demo,
    Production,
}

impl Mode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Demo => "demo",
            Mode::Production => "production",
        }
    }
}

/// Whether a call may spend provider quota.
///
/// An exhausted budget skips Giphy entirely and degrades the same way an
/// upstream failure does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamBudget {
    Available,
    Exhausted,
}

/// Error text reported by [`FetchPipeline::probe_within`] when the budget is spent.
pub const BUDGET_EXHAUSTED: &str = "request budget exhausted; Giphy was not contacted";

/// Outcome of a provider reachability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeReport {
    /// No usable key; nothing was sent.
    Demo,
    Reachable { result_count: usize },
    Unreachable { error: String },
}

/// Read-only pipeline shared by every request.
#[derive(Debug, Clone)]
pub struct FetchPipeline {
    client: GiphyClient,
    credential: Credential,
    substitutes: &'static [MediaItem],
}

impl FetchPipeline {
    #[must_use]
    pub fn new(client: GiphyClient, credential: Credential) -> Self {
        Self {
            client,
            credential,
            substitutes: substitute_set(),
        }
    }

    /// Builds the client and pipeline from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GiphyError`] if the HTTP client cannot be built or the
    /// configured base URL is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, GiphyError> {
        let client = GiphyClient::with_base_url(
            config.giphy_timeout_secs,
            &config.user_agent,
            &config.giphy_base_url,
        )?
        .with_rating(config.giphy_rating.clone())
        .with_lang(config.giphy_lang.clone());
        Ok(Self::new(client, config.giphy_api_key.clone()))
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.credential.is_configured() {
            Mode::Production
        } else {
            Mode::Demo
        }
    }

    /// Returns one GIF for `raw_keyword`, live when possible.
    ///
    /// Searches first, falls back to trending when the search is empty, and
    /// substitutes a random built-in GIF when both miss, either call fails,
    /// or the chosen record is malformed.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordError::Empty`] when the keyword is blank. No request
    /// is sent in that case.
    pub async fn fetch_random(
        &self,
        raw_keyword: &str,
    ) -> Result<Fetched<MediaItem>, KeywordError> {
        self.fetch_random_within(raw_keyword, UpstreamBudget::Available)
            .await
    }

    /// [`fetch_random`](Self::fetch_random) that substitutes without calling
    /// Giphy when `budget` is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordError::Empty`] when the keyword is blank.
    pub async fn fetch_random_within(
        &self,
        raw_keyword: &str,
        budget: UpstreamBudget,
    ) -> Result<Fetched<MediaItem>, KeywordError> {
        let keyword = Keyword::parse(raw_keyword)?;

        let Some(api_key) = self.credential.usable() else {
            tracing::debug!(%keyword, "demo mode: serving substitute GIF");
            return Ok(Fetched::substituted(self.random_substitute()));
        };

        if budget == UpstreamBudget::Exhausted {
            tracing::warn!(%keyword, "request budget exhausted, substituting");
            return Ok(Fetched::substituted(self.random_substitute()));
        }

        let Some(candidates) = self.live_candidates(api_key, &keyword).await else {
            return Ok(Fetched::substituted(self.random_substitute()));
        };

        let Some(chosen) = pick(&candidates) else {
            return Ok(Fetched::substituted(self.random_substitute()));
        };

        match normalize_item(chosen) {
            Ok(item) => Ok(Fetched::live(item)),
            Err(e) => {
                tracing::warn!(%keyword, error = %e, "selected GIF is malformed, substituting");
                Ok(Fetched::substituted(self.random_substitute()))
            }
        }
    }

    /// Returns up to `limit` trending GIFs; `limit` is clamped to `[1, 25]`.
    ///
    /// On upstream failure the first `limit` substitutes are returned instead.
    /// Malformed records in a live batch are skipped, so a live batch may be
    /// shorter than `limit`.
    pub async fn fetch_trending(&self, limit: i64) -> Fetched<Vec<MediaItem>> {
        self.fetch_trending_within(limit, UpstreamBudget::Available)
            .await
    }

    /// [`fetch_trending`](Self::fetch_trending) that serves the leading
    /// substitutes without calling Giphy when `budget` is exhausted.
    pub async fn fetch_trending_within(
        &self,
        limit: i64,
        budget: UpstreamBudget,
    ) -> Fetched<Vec<MediaItem>> {
        let limit = clamp_limit(limit);

        let Some(api_key) = self.credential.usable() else {
            tracing::debug!(limit, "demo mode: serving substitute trending GIFs");
            return Fetched::substituted(self.leading_substitutes(limit));
        };

        if budget == UpstreamBudget::Exhausted {
            tracing::warn!(limit, "request budget exhausted, substituting trending GIFs");
            return Fetched::substituted(self.leading_substitutes(limit));
        }

        match self.client.trending(api_key, limit).await {
            Ok(raws) => Fetched::live(reconcile_batch(&raws, limit)),
            Err(e) => {
                tracing::warn!(limit, error = %e, "Giphy trending failed, substituting");
                Fetched::substituted(self.leading_substitutes(limit))
            }
        }
    }

    /// Checks provider reachability with a single one-item trending call.
    pub async fn probe(&self) -> ProbeReport {
        self.probe_within(UpstreamBudget::Available).await
    }

    /// [`probe`](Self::probe) that reports the provider as unreachable,
    /// without calling it, when `budget` is exhausted.
    pub async fn probe_within(&self, budget: UpstreamBudget) -> ProbeReport {
        let Some(api_key) = self.credential.usable() else {
            return ProbeReport::Demo;
        };

        if budget == UpstreamBudget::Exhausted {
            return ProbeReport::Unreachable {
                error: BUDGET_EXHAUSTED.to_owned(),
            };
        }

        match self.client.trending(api_key, 1).await {
            Ok(raws) => ProbeReport::Reachable {
                result_count: raws.len(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Giphy probe failed");
                ProbeReport::Unreachable {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Search, then trending when the search is empty. `None` means every
    /// attempt failed or came back empty.
    async fn live_candidates(
        &self,
        api_key: &str,
        keyword: &Keyword,
    ) -> Option<Vec<RawMediaItem>> {
        match self.client.search(api_key, keyword.as_str(), MAX_LIMIT).await {
            Ok(items) if !items.is_empty() => return Some(items),
            Ok(_) => {
                tracing::info!(%keyword, "Giphy search returned nothing, trying trending");
            }
            Err(e) => {
                tracing::warn!(%keyword, error = %e, "Giphy search failed, substituting");
                return None;
            }
        }

        match self.client.trending(api_key, MAX_LIMIT).await {
            Ok(items) if !items.is_empty() => Some(items),
            Ok(_) => {
                tracing::warn!(%keyword, "Giphy trending returned nothing, substituting");
                None
            }
            Err(e) => {
                tracing::warn!(%keyword, error = %e, "Giphy trending failed, substituting");
                None
            }
        }
    }

    fn random_substitute(&self) -> MediaItem {
        pick(self.substitutes)
            .cloned()
            .unwrap_or_else(placeholder_item)
    }

    fn leading_substitutes(&self, limit: u32) -> Vec<MediaItem> {
        self.substitutes
            .iter()
            .take(limit as usize)
            .cloned()
            .collect()
    }
}

/// Clamps a caller-supplied batch size into `[1, MAX_LIMIT]`.
#[must_use]
pub fn clamp_limit(limit: i64) -> u32 {
    let clamped = limit.clamp(1, i64::from(MAX_LIMIT));
    u32::try_from(clamped).unwrap_or(MAX_LIMIT)
}

fn reconcile_batch(raws: &[RawMediaItem], limit: u32) -> Vec<MediaItem> {
    raws.iter()
        .filter_map(|raw| match normalize_item(raw) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::debug!(error = %e, "dropping malformed trending GIF");
                None
            }
        })
        .take(limit as usize)
        .collect()
}

/// Stand-in for an empty substitute set, built from the reconciler defaults.
fn placeholder_item() -> MediaItem {
    MediaItem {
        id: MediaItem::DEFAULT_ID.to_owned(),
        title: MediaItem::DEFAULT_TITLE.to_owned(),
        url: String::new(),
        preview_url: String::new(),
        width: MediaItem::DEFAULT_WIDTH,
        height: MediaItem::DEFAULT_HEIGHT,
    }
}

/// Uniform choice. The thread-local RNG never lives across an `.await`.
fn pick<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limit_bounds() {
        assert_eq!(clamp_limit(-5), 1);
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(1), 1);
        assert_eq!(clamp_limit(DEFAULT_TRENDING_LIMIT), 10);
        assert_eq!(clamp_limit(25), 25);
        assert_eq!(clamp_limit(100), 25);
        assert_eq!(clamp_limit(i64::MIN), 1);
        assert_eq!(clamp_limit(i64::MAX), 25);
    }

    #[test]
    fn reconcile_batch_skips_malformed_and_respects_limit() {
        let raws: Vec<RawMediaItem> = serde_json::from_value(serde_json::json!([
            { "id": "a", "images": { "original": { "url": "a.gif" } } },
            { "id": "b", "images": {} },
            { "id": "c", "images": { "original": { "url": "c.gif", "width": "x" } } },
            { "id": "d", "images": { "original": { "url": "d.gif" } } },
            { "id": "e", "images": { "original": { "url": "e.gif" } } }
        ]))
        .unwrap();

        let ids: Vec<String> = reconcile_batch(&raws, 25).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["a", "d", "e"]);

        let ids: Vec<String> = reconcile_batch(&raws, 2).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["a", "d"]);
    }

    #[test]
    fn source_and_mode_labels() {
        assert_eq!(Source::Live.as_str(), "live");
        assert_eq!(Source::Substituted.as_str(), "substitute");
        assert_eq!(Mode::Demo.as_str(), "demo");
        assert_eq!(Mode::Production.as_str(), "production");
    }

    #[test]
    fn random_substitute_comes_from_the_set() {
        let client = GiphyClient::new(1, "gifmood-test").unwrap();
        let pipeline = FetchPipeline::new(client, Credential::absent());
        for _ in 0..20 {
            let item = pipeline.random_substitute();
            assert!(substitute_set().contains(&item), "{item:?}");
        }
    }

    #[test]
    fn empty_substitute_set_falls_back_to_defaults() {
        let client = GiphyClient::new(1, "gifmood-test").unwrap();
        let pipeline = FetchPipeline {
            client,
            credential: Credential::absent(),
            substitutes: &[],
        };
        let item = pipeline.random_substitute();
        assert_eq!(item.id, MediaItem::DEFAULT_ID);
        assert_eq!(item.width, MediaItem::DEFAULT_WIDTH);
    }

    #[test]
    fn pick_from_empty_is_none() {
        let empty: [u8; 0] = [];
        assert!(pick(&empty).is_none());
    }
}
