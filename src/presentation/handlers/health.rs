use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::config::FeatureFlags;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub features: FeatureFlags,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let features = FeatureFlags {
        ai: state.triage_service.is_configured(),
        transcription: state.voice_service.is_configured(),
        persistence: state.symptom_journal.is_enabled(),
        identity: state.settings.identity.is_configured(),
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            features,
        }),
    )
}
