use std::sync::Arc;

use crate::application::ports::{RepositoryError, SymptomRepository};
use crate::domain::{RecordId, RecordKind, StructuredResponse, SymptomRecord};

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Result of a best-effort write. Callers are free to ignore it.
#[derive(Debug)]
pub enum PersistOutcome {
    Stored(RecordId),
    Disabled,
    Failed(RepositoryError),
}

impl PersistOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, PersistOutcome::Stored(_))
    }
}

/// Records symptom checks and reads them back for the history views.
///
/// Without a repository every write is `Disabled` and every read is empty.
pub struct SymptomJournal {
    repository: Option<Arc<dyn SymptomRepository>>,
    history_limit: usize,
}

impl SymptomJournal {
    /// `history_limit` is clamped to `1..=DEFAULT_HISTORY_LIMIT`; Mongo reads
    /// a zero limit as unbounded.
    pub fn new(repository: Option<Arc<dyn SymptomRepository>>, history_limit: usize) -> Self {
        let clamped = history_limit.clamp(1, DEFAULT_HISTORY_LIMIT);
        if clamped != history_limit {
            tracing::warn!(
                configured = history_limit,
                used = clamped,
                "History limit out of range, clamping"
            );
        }

        Self {
            repository,
            history_limit: clamped,
        }
    }

    pub fn disabled() -> Self {
        Self::new(None, DEFAULT_HISTORY_LIMIT)
    }

    pub fn is_enabled(&self) -> bool {
        self.repository.is_some()
    }

    #[tracing::instrument(skip(self, prompt, response), fields(kind = %kind))]
    pub async fn record<T: StructuredResponse>(
        &self,
        kind: RecordKind,
        prompt: &str,
        response: &T,
    ) -> PersistOutcome {
        let Some(repository) = &self.repository else {
            tracing::debug!("Persistence disabled, skipping record");
            return PersistOutcome::Disabled;
        };

        let record = match SymptomRecord::new(kind, prompt, response) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize symptom record");
                return PersistOutcome::Failed(RepositoryError::Serialization(e.to_string()));
            }
        };

        match repository.insert(&record).await {
            Ok(id) => {
                tracing::info!(record_id = %id, "Symptom record stored");
                PersistOutcome::Stored(id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to store symptom record");
                PersistOutcome::Failed(e)
            }
        }
    }

    /// Most recent basic checks, newest first, capped at the history limit.
    #[tracing::instrument(skip(self))]
    pub async fn history(&self) -> Result<Vec<SymptomRecord>, RepositoryError> {
        match &self.repository {
            Some(repository) => {
                repository
                    .recent(RecordKind::Basic, self.history_limit)
                    .await
            }
            None => Ok(Vec::new()),
        }
    }

    /// Earlier checks used as context for a detailed analysis.
    ///
    /// Entries repeating `current_prompt` are skipped. Read failures are
    /// logged and produce an empty context.
    #[tracing::instrument(skip(self, current_prompt))]
    pub async fn prior_context(&self, current_prompt: &str, limit: usize) -> Vec<SymptomRecord> {
        let Some(repository) = &self.repository else {
            return Vec::new();
        };

        // One extra in case the newest entry is the check being analysed.
        match repository.recent(RecordKind::Basic, limit + 1).await {
            Ok(records) => records
                .into_iter()
                .filter(|r| r.prompt.trim() != current_prompt.trim())
                .take(limit)
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load history context");
                Vec::new()
            }
        }
    }

    pub async fn shutdown(&self) {
        if let Some(repository) = &self.repository {
            repository.shutdown().await;
        }
    }
}
