use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::TranscriptionError;
use crate::application::services::VoiceError;
use crate::presentation::state::AppState;

use super::envelope::{ResponseStatus, error_response, json_body, required_text};

const MISSING_AUDIO_MESSAGE: &str = "No audio data provided";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceRequest {
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

#[derive(Serialize)]
pub struct VoiceResponse {
    pub status: ResponseStatus,
    pub text: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn voice_handler(
    State(state): State<AppState>,
    payload: Result<Json<VoiceRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload, MISSING_AUDIO_MESSAGE) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let Some(audio) = required_text(request.audio) else {
        return error_response(StatusCode::BAD_REQUEST, MISSING_AUDIO_MESSAGE);
    };

    match state
        .voice_service
        .transcribe_base64(&audio, request.mime_type.as_deref())
        .await
    {
        Ok(text) => {
            tracing::info!(chars = text.len(), "Voice transcription successful");
            (
                StatusCode::OK,
                Json(VoiceResponse {
                    status: ResponseStatus::Success,
                    text,
                }),
            )
                .into_response()
        }
        Err(e) => voice_error_response(e),
    }
}

fn voice_error_response(error: VoiceError) -> Response {
    match error {
        VoiceError::NotConfigured => {
            tracing::warn!("Voice request received but transcription is not configured");
            error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "Transcription provider not configured",
            )
        }
        VoiceError::InvalidAudio(e) => {
            tracing::warn!(error = %e, "Invalid audio payload");
            error_response(StatusCode::BAD_REQUEST, format!("Invalid audio data: {}", e))
        }
        VoiceError::Transcription(TranscriptionError::ProviderRejected { status, body }) => {
            tracing::error!(status, body = %body, "Transcription provider error");
            let status = StatusCode::from_u16(status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            error_response(status, format!("Transcription provider error: {}", body))
        }
        VoiceError::Transcription(e) => {
            tracing::error!(error = %e, "Voice processing failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Voice processing failed")
        }
    }
}
