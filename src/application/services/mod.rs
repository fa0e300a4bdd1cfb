pub mod prompt_templates;
pub mod response_parser;
mod symptom_journal;
mod triage_service;
mod voice_service;

pub use symptom_journal::{DEFAULT_HISTORY_LIMIT, PersistOutcome, SymptomJournal};
pub use triage_service::{Assessment, FallbackReason, TriageService};
pub use voice_service::{VoiceError, VoiceService};
