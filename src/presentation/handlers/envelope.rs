use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub message: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            status: ResponseStatus::Error,
            message: message.into(),
        }),
    )
        .into_response()
}

/// Unwraps a JSON body, answering 400 in the envelope format when the body
/// is missing or malformed.
pub fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    missing_message: &str,
) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected request body");
            Err(error_response(StatusCode::BAD_REQUEST, missing_message))
        }
    }
}

/// Trimmed, non-empty value of an optional text field.
pub fn required_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
