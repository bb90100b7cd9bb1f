use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::speech::{SpeechService, SpeechServiceApi};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness does not depend on a synthesis engine being present
pub async fn health_ready(State(speech_service): State<Arc<SpeechService>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "speech": speech_service.availability()
        })),
    )
}
