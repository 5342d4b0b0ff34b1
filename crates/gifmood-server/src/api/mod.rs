mod emotions;
mod gifs;
mod status;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use gifmood_giphy::{FetchPipeline, Source};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{meter_upstream_budget, request_id, RateLimitState, REQUEST_ID_HEADER};

/// Response header naming where a GIF payload came from: `live` or `substitute`.
pub const SOURCE_HEADER: &str = "x-gif-source";

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<FetchPipeline>,
}

/// Error body. `detail` is the field the browser client displays.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub detail: String,
    pub code: String,
    pub request_id: String,
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            detail: detail.into(),
            code: code.into(),
            request_id: request_id.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Wraps a JSON body with the [`SOURCE_HEADER`] header.
pub(super) fn with_source<T: Serialize>(source: Source, body: T) -> Response {
    (
        [(
            HeaderName::from_static(SOURCE_HEADER),
            HeaderValue::from_static(source.as_str()),
        )],
        Json(body),
    )
        .into_response()
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([
            HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderName::from_static(SOURCE_HEADER),
        ])
}

/// Routes that may reach Giphy, and therefore spend API quota. Past the
/// limit they still answer, from the substitute set.
fn upstream_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/gif/random", post(gifs::random_gif))
        .route("/gif/trending", get(gifs::trending_gifs))
        .route("/test", get(status::diagnostics))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            meter_upstream_budget,
        ))
}

pub fn build_app(state: AppState, cors_origins: &[String], rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new()
        .route("/", get(status::health))
        .route("/emotions", get(emotions::list_emotions));

    Router::new()
        .merge(public_routes)
        .merge(upstream_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors(cors_origins))
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}
