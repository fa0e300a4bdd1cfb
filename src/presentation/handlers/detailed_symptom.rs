use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::{DetailedAnalysis, RecordKind};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::envelope::{ResponseStatus, error_response, json_body, required_text};
use super::symptom::{MISSING_PROMPT_MESSAGE, SymptomRequest};

#[derive(Serialize)]
pub struct DetailedSymptomResponse {
    pub status: ResponseStatus,
    pub output: DetailedAnalysis,
    pub context: HistoryContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryContext {
    pub history_used: bool,
    pub total_history_entries: usize,
}

#[tracing::instrument(skip(state, payload))]
pub async fn detailed_symptom_handler(
    State(state): State<AppState>,
    payload: Result<Json<SymptomRequest>, JsonRejection>,
) -> Response {
    let prompt = match json_body(payload, MISSING_PROMPT_MESSAGE).map(|r| required_text(r.prompt)) {
        Ok(Some(prompt)) => prompt,
        Ok(None) => return error_response(StatusCode::BAD_REQUEST, MISSING_PROMPT_MESSAGE),
        Err(response) => return response,
    };

    tracing::debug!(prompt = %sanitize_prompt(&prompt), "Processing detailed analysis");

    let history = state
        .symptom_journal
        .prior_context(&prompt, state.settings.database.history_context_entries)
        .await;

    let assessment = state
        .triage_service
        .assess_detailed(&prompt, &history)
        .await;

    let outcome = state
        .symptom_journal
        .record(RecordKind::Detailed, &prompt, &assessment.result)
        .await;
    tracing::debug!(
        stored = outcome.is_stored(),
        fallback = assessment.is_fallback(),
        history_entries = history.len(),
        "Detailed analysis completed"
    );

    let context = HistoryContext {
        history_used: !history.is_empty() && !assessment.is_fallback(),
        total_history_entries: history.len(),
    };

    (
        StatusCode::OK,
        Json(DetailedSymptomResponse {
            status: ResponseStatus::Success,
            message: assessment
                .fallback_reason
                .as_ref()
                .map(|r| r.user_message().to_string()),
            output: assessment.result,
            context,
        }),
    )
        .into_response()
}
