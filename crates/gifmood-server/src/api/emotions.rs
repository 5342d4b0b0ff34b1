use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(super) struct EmotionsResponse {
    emotions: Vec<String>,
}

pub(super) async fn list_emotions() -> Json<EmotionsResponse> {
    Json(EmotionsResponse {
        emotions: gifmood_core::emotion_catalog(),
    })
}
