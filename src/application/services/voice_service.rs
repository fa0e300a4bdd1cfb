use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioPayload, AudioPayloadError};

pub struct VoiceService {
    engine: Option<Arc<dyn TranscriptionEngine>>,
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    #[error("transcription provider not configured")]
    NotConfigured,
    #[error("invalid audio: {0}")]
    InvalidAudio(#[from] AudioPayloadError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
}

impl VoiceService {
    pub fn new(engine: Option<Arc<dyn TranscriptionEngine>>) -> Self {
        Self { engine }
    }

    pub fn is_configured(&self) -> bool {
        self.engine.is_some()
    }

    #[tracing::instrument(skip(self, encoded_audio))]
    pub async fn transcribe_base64(
        &self,
        encoded_audio: &str,
        mime_type: Option<&str>,
    ) -> Result<String, VoiceError> {
        let engine = self.engine.as_ref().ok_or(VoiceError::NotConfigured)?;

        let audio = AudioPayload::from_base64(encoded_audio, mime_type)?;
        tracing::debug!(
            bytes = audio.len(),
            mime_type = %audio.mime_type(),
            "Decoded audio payload"
        );

        let text = engine.transcribe(&audio).await?;
        Ok(text)
    }
}
