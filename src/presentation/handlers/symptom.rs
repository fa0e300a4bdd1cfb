use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::{RecordKind, TriageResult};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::envelope::{ResponseStatus, error_response, json_body, required_text};

pub const MISSING_PROMPT_MESSAGE: &str = "No prompt provided";

#[derive(Deserialize)]
pub struct SymptomRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Serialize)]
pub struct SymptomResponse {
    pub status: ResponseStatus,
    pub output: TriageResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn symptom_handler(
    State(state): State<AppState>,
    payload: Result<Json<SymptomRequest>, JsonRejection>,
) -> Response {
    let prompt = match json_body(payload, MISSING_PROMPT_MESSAGE).map(|r| required_text(r.prompt)) {
        Ok(Some(prompt)) => prompt,
        Ok(None) => return error_response(StatusCode::BAD_REQUEST, MISSING_PROMPT_MESSAGE),
        Err(response) => return response,
    };

    tracing::debug!(prompt = %sanitize_prompt(&prompt), "Processing symptom check");

    let assessment = state.triage_service.assess_triage(&prompt).await;

    let outcome = state
        .symptom_journal
        .record(RecordKind::Basic, &prompt, &assessment.result)
        .await;
    tracing::debug!(
        stored = outcome.is_stored(),
        fallback = assessment.is_fallback(),
        "Symptom check completed"
    );

    (
        StatusCode::OK,
        Json(SymptomResponse {
            status: ResponseStatus::Success,
            message: assessment
                .fallback_reason
                .as_ref()
                .map(|r| r.user_message().to_string()),
            output: assessment.result,
        }),
    )
        .into_response()
}
