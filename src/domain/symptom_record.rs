use chrono::{DateTime, Utc};

use super::{RecordId, RecordKind, StructuredResponse};

/// One completed symptom check as kept in the document store.
///
/// `response` is always the JSON form of a complete [`StructuredResponse`];
/// records are written once and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct SymptomRecord {
    pub id: Option<RecordId>,
    pub kind: RecordKind,
    pub prompt: String,
    pub response: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl SymptomRecord {
    pub fn new<T: StructuredResponse>(
        kind: RecordKind,
        prompt: impl Into<String>,
        response: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: None,
            kind,
            prompt: prompt.into(),
            response: serde_json::to_value(response)?,
            created_at: Utc::now(),
        })
    }

    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }
}
