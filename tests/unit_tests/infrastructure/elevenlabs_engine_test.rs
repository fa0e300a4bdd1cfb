use symptom_checker::application::ports::{TranscriptionEngine, TranscriptionError};
use symptom_checker::domain::AudioPayload;
use symptom_checker::infrastructure::audio::ElevenLabsEngine;

use super::mock_provider::MockProvider;

fn engine_for(server: &MockProvider) -> ElevenLabsEngine {
    ElevenLabsEngine::new("test-key".to_string(), Some(server.base_url.clone()), None)
}

fn sample_audio() -> AudioPayload {
    AudioPayload::new(b"fake audio bytes".to_vec(), "audio/webm")
}

#[tokio::test]
async fn given_valid_audio_when_transcribing_then_returns_trimmed_text() {
    let server = MockProvider::start(200, r#"{"text": "  I have a headache  "}"#).await;

    let result = engine_for(&server).transcribe(&sample_audio()).await;

    assert_eq!(result.unwrap(), "I have a headache");
}

#[tokio::test]
async fn given_audio_when_transcribing_then_uploads_multipart_with_model_and_key() {
    let server = MockProvider::start(200, r#"{"text": "hello"}"#).await;

    engine_for(&server).transcribe(&sample_audio()).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.path, "/v1/speech-to-text");
    assert_eq!(request.headers["xi-api-key"], "test-key");
    assert!(
        request.headers["content-type"]
            .to_str()
            .unwrap()
            .starts_with("multipart/form-data")
    );
    assert!(request.body.contains(r#"name="model_id""#));
    assert!(request.body.contains(ElevenLabsEngine::DEFAULT_MODEL_ID));
    assert!(request.body.contains(r#"name="file""#));
    assert!(request.body.contains("fake audio bytes"));
}

#[tokio::test]
async fn given_provider_rejects_when_transcribing_then_returns_status_and_body() {
    let server = MockProvider::start(401, r#"{"detail": "invalid api key"}"#).await;

    let result = engine_for(&server).transcribe(&sample_audio()).await;

    match result {
        Err(TranscriptionError::ProviderRejected { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("expected ProviderRejected, got {:?}", other),
    }
}

#[tokio::test]
async fn given_malformed_success_body_when_transcribing_then_returns_invalid_response() {
    let server = MockProvider::start(200, r#"{"words": []}"#).await;

    let result = engine_for(&server).transcribe(&sample_audio()).await;

    assert!(matches!(result, Err(TranscriptionError::InvalidResponse(_))));
}
