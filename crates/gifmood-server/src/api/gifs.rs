use std::num::IntErrorKind;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Response,
    Extension, Json,
};
use gifmood_core::MediaItem;
use gifmood_giphy::{UpstreamBudget, DEFAULT_TRENDING_LIMIT};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{with_source, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct RandomGifRequest {
    emotion: String,
}

/// `limit` stays textual so integers beyond `i64` still clamp instead of
/// failing extraction.
#[derive(Debug, Deserialize)]
pub(super) struct TrendingQuery {
    limit: Option<String>,
}

/// Parses a decimal integer of any magnitude. Out-of-range values saturate
/// toward their sign, which the pipeline then clamps.
fn parse_limit(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(limit) => Some(limit),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[derive(Debug, Serialize)]
pub(super) struct TrendingResponse {
    gifs: Vec<MediaItem>,
}

pub(super) async fn random_gif(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(budget): Extension<UpstreamBudget>,
    payload: Result<Json<RandomGifRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) =
        payload.map_err(|e| ApiError::new(req_id.0.clone(), "bad_request", e.body_text()))?;

    let fetched = state
        .pipeline
        .fetch_random_within(&request.emotion, budget)
        .await
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    tracing::info!(
        request_id = %req_id.0,
        gif_id = %fetched.value.id,
        source = fetched.source.as_str(),
        "served random GIF"
    );
    Ok(with_source(fetched.source, fetched.value))
}

pub(super) async fn trending_gifs(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(budget): Extension<UpstreamBudget>,
    query: Result<Query<TrendingQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) =
        query.map_err(|e| ApiError::new(req_id.0.clone(), "bad_request", e.body_text()))?;

    let limit = match query.limit.as_deref() {
        None => DEFAULT_TRENDING_LIMIT,
        Some(raw) => parse_limit(raw).ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "bad_request",
                format!("limit must be an integer, got {raw:?}"),
            )
        })?,
    };

    let fetched = state.pipeline.fetch_trending_within(limit, budget).await;

    tracing::info!(
        request_id = %req_id.0,
        count = fetched.value.len(),
        source = fetched.source.as_str(),
        "served trending GIFs"
    );
    Ok(with_source(
        fetched.source,
        TrendingResponse {
            gifs: fetched.value,
        },
    ))
}
