mod detailed_symptom;
pub mod envelope;
mod health;
mod history;
mod symptom;
mod voice;

pub use detailed_symptom::{DetailedSymptomResponse, HistoryContext, detailed_symptom_handler};
pub use health::{HealthResponse, health_handler};
pub use history::{HistoryEntry, HistoryResponse, history_handler};
pub use symptom::{SymptomRequest, SymptomResponse, symptom_handler};
pub use voice::{VoiceRequest, VoiceResponse, voice_handler};
