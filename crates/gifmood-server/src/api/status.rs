//! Liveness and provider diagnostics. Neither endpoint ever fails.

use axum::{extract::State, Extension, Json};
use gifmood_giphy::{Mode, ProbeReport, UpstreamBudget};
use serde::Serialize;

use crate::middleware::RequestId;

use super::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(super) struct HealthData {
    message: &'static str,
    status: &'static str,
    mode: &'static str,
    api_key_configured: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(super) struct DiagnosticData {
    status: &'static str,
    message: String,
    api_key_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result_count: Option<usize>,
}

pub(super) async fn health(State(state): State<AppState>) -> Json<HealthData> {
    let mode = state.pipeline.mode();
    Json(HealthData {
        message: "GIF Reaction Picker API is running!",
        status: "healthy",
        mode: mode.as_str(),
        api_key_configured: mode == Mode::Production,
    })
}

pub(super) async fn diagnostics(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(budget): Extension<UpstreamBudget>,
) -> Json<DiagnosticData> {
    let report = state.pipeline.probe_within(budget).await;
    tracing::info!(request_id = %req_id.0, ?report, "provider diagnostics");
    Json(diagnostic_data(report))
}

fn diagnostic_data(report: ProbeReport) -> DiagnosticData {
    match report {
        ProbeReport::Demo => DiagnosticData {
            status: "demo_mode",
            message: "No Giphy API key configured; serving built-in demo GIFs".to_string(),
            api_key_configured: false,
            result_count: None,
        },
        ProbeReport::Reachable { result_count } => DiagnosticData {
            status: "success",
            message: "Giphy API connection successful".to_string(),
            api_key_configured: true,
            result_count: Some(result_count),
        },
        ProbeReport::Unreachable { error } => DiagnosticData {
            status: "error",
            message: format!("Giphy API connection failed: {error}"),
            api_key_configured: true,
            result_count: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_report_carries_error_text() {
        let data = diagnostic_data(ProbeReport::Unreachable {
            error: "HTTP error: timed out".to_string(),
        });
        assert_eq!(data.status, "error");
        assert!(data.message.ends_with("HTTP error: timed out"));
        assert!(data.api_key_configured);
        assert_eq!(data.result_count, None);
    }

    #[test]
    fn reachable_report_serializes_count() {
        let data = diagnostic_data(ProbeReport::Reachable { result_count: 1 });
        let json = serde_json::to_value(&data).expect("serialize");
        assert_eq!(json["status"], "success");
        assert_eq!(json["result_count"], 1);
    }
}
