use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::SymptomRecord;
use crate::presentation::state::AppState;

use super::envelope::ResponseStatus;

#[derive(Serialize)]
pub struct HistoryResponse {
    pub status: ResponseStatus,
    pub history: Vec<HistoryEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub symptom: String,
    pub response: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl From<SymptomRecord> for HistoryEntry {
    fn from(record: SymptomRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_string()).unwrap_or_default(),
            symptom: record.prompt,
            response: record.response,
            timestamp: record.created_at,
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn history_handler(State(state): State<AppState>) -> Response {
    match state.symptom_journal.history().await {
        Ok(records) => {
            tracing::info!(count = records.len(), "History fetched");
            let message = (!state.symptom_journal.is_enabled())
                .then(|| "History storage is not configured".to_string());
            (
                StatusCode::OK,
                Json(HistoryResponse {
                    status: ResponseStatus::Success,
                    history: records.into_iter().map(HistoryEntry::from).collect(),
                    message,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch symptom history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HistoryResponse {
                    status: ResponseStatus::Error,
                    history: Vec::new(),
                    message: Some("Failed to fetch symptom history".to_string()),
                }),
            )
                .into_response()
        }
    }
}
