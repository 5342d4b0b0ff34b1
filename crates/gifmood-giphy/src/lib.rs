//! Giphy integration: HTTP client, raw response types, reconciliation into
//! [`gifmood_core::MediaItem`], and the fetch-and-fallback pipeline.

pub mod client;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod types;

pub use client::GiphyClient;
pub use error::{GiphyError, MalformedItem};
pub use normalize::normalize_item;
pub use pipeline::{
    clamp_limit, FetchPipeline, Fetched, Mode, ProbeReport, Source, UpstreamBudget,
    BUDGET_EXHAUSTED, DEFAULT_TRENDING_LIMIT, MAX_LIMIT,
};
pub use types::{ImageVariant, RawMediaItem};
