use serde::{Deserialize, Serialize};

use super::StructuredResponse;
use super::Urgency;

pub const FALLBACK_SUGGESTION: &str = "Rest, drink fluids, monitor symptoms.";
pub const FALLBACK_NEXT_STEPS: &str = "See a doctor if symptoms worsen.";

/// Quick triage answer for a symptom description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    pub urgency: Urgency,
    pub suggestion: String,
    pub next_steps: String,
}

impl StructuredResponse for TriageResult {
    const LABEL: &'static str = "triage";

    fn fallback() -> Self {
        Self {
            urgency: Urgency::Medium,
            suggestion: FALLBACK_SUGGESTION.to_string(),
            next_steps: FALLBACK_NEXT_STEPS.to_string(),
        }
    }
}
