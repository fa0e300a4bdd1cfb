use async_trait::async_trait;

use crate::domain::AudioPayload;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("provider returned status {status}: {body}")]
    ProviderRejected { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
