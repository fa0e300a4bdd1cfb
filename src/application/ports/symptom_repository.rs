use async_trait::async_trait;

use crate::domain::{RecordId, RecordKind, SymptomRecord};

use super::RepositoryError;

#[async_trait]
pub trait SymptomRepository: Send + Sync {
    async fn insert(&self, record: &SymptomRecord) -> Result<RecordId, RepositoryError>;

    /// Newest first, at most `limit` records of the given kind.
    async fn recent(
        &self,
        kind: RecordKind,
        limit: usize,
    ) -> Result<Vec<SymptomRecord>, RepositoryError>;

    /// Releases any connection held by the repository.
    async fn shutdown(&self) {}
}
