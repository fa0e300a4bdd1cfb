mod llm_client;
mod repository_error;
mod symptom_repository;
mod transcription_engine;

pub use llm_client::{LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
pub use symptom_repository::SymptomRepository;
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
