mod audio_payload;
mod detailed_analysis;
mod record_id;
mod record_kind;
mod structured_response;
mod symptom_record;
mod triage_result;
mod urgency;

pub use audio_payload::{AudioPayload, AudioPayloadError, DEFAULT_AUDIO_MIME_TYPE};
pub use detailed_analysis::{
    DetailedAnalysis, FALLBACK_LIFESTYLE_RECOMMENDATIONS, FALLBACK_POSSIBLE_CONDITIONS,
    FALLBACK_RISK_FACTORS, FALLBACK_WHEN_TO_SEEK_CARE,
};
pub use record_id::RecordId;
pub use record_kind::RecordKind;
pub use structured_response::StructuredResponse;
pub use symptom_record::SymptomRecord;
pub use triage_result::{FALLBACK_NEXT_STEPS, FALLBACK_SUGGESTION, TriageResult};
pub use urgency::Urgency;
