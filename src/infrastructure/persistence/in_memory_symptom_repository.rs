use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, SymptomRepository};
use crate::domain::{RecordId, RecordKind, SymptomRecord};

/// Process-local repository for development runs and tests.
#[derive(Default)]
pub struct InMemorySymptomRepository {
    records: RwLock<Vec<SymptomRecord>>,
}

impl InMemorySymptomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl SymptomRepository for InMemorySymptomRepository {
    async fn insert(&self, record: &SymptomRecord) -> Result<RecordId, RepositoryError> {
        let id = RecordId::new(Uuid::new_v4().simple().to_string());
        self.records
            .write()
            .await
            .push(record.clone().with_id(id.clone()));
        Ok(id)
    }

    async fn recent(
        &self,
        kind: RecordKind,
        limit: usize,
    ) -> Result<Vec<SymptomRecord>, RepositoryError> {
        let records = self.records.read().await;

        // Walking backwards keeps later inserts first among equal timestamps.
        let mut matching: Vec<SymptomRecord> = records
            .iter()
            .rev()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(limit);

        Ok(matching)
    }
}
