use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::AudioPayload;

pub struct ElevenLabsEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model_id: String,
}

impl ElevenLabsEngine {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.elevenlabs.io";
    pub const DEFAULT_MODEL_ID: &'static str = "scribe_v1";

    pub fn new(api_key: String, base_url: Option<String>, model_id: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model_id: model_id.unwrap_or_else(|| Self::DEFAULT_MODEL_ID.to_string()),
        }
    }

    fn file_part(audio: &AudioPayload) -> multipart::Part {
        let part = multipart::Part::bytes(audio.bytes().to_vec()).file_name(audio.file_name());
        match part.mime_str(audio.mime_type()) {
            Ok(part) => part,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    mime_type = %audio.mime_type(),
                    "Unparseable audio MIME type, uploading without one"
                );
                multipart::Part::bytes(audio.bytes().to_vec()).file_name(audio.file_name())
            }
        }
    }
}

#[derive(Deserialize)]
struct SpeechToTextResponse {
    text: String,
}

#[async_trait]
impl TranscriptionEngine for ElevenLabsEngine {
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, TranscriptionError> {
        let url = format!("{}/v1/speech-to-text", self.base_url);

        let form = multipart::Form::new()
            .text("model_id", self.model_id.clone())
            .part("file", Self::file_part(audio));

        tracing::debug!(
            model_id = %self.model_id,
            bytes = audio.len(),
            "Sending audio to ElevenLabs speech-to-text"
        );

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            tracing::error!(status = %status, body = %body, "ElevenLabs rejected transcription");
            return Err(TranscriptionError::ProviderRejected {
                status: status.as_u16(),
                body,
            });
        }

        let result: SpeechToTextResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))?;

        tracing::info!(
            chars = result.text.len(),
            "ElevenLabs transcription completed"
        );

        Ok(result.text.trim().to_string())
    }
}
