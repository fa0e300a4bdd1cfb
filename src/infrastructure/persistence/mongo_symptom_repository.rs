use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, doc};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{info, instrument};

use crate::application::ports::{RepositoryError, SymptomRepository};
use crate::domain::{RecordId, RecordKind, SymptomRecord};

/// Document shape shared by the `symptoms` and `detailed_symptoms`
/// collections.
#[derive(Debug, Serialize, Deserialize)]
struct SymptomDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(default)]
    prompt: String,
    #[serde(default)]
    response: Bson,
    #[serde(
        rename = "createdAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MongoCollections {
    pub database: String,
    pub basic: String,
    pub detailed: String,
}

impl Default for MongoCollections {
    fn default() -> Self {
        Self {
            database: "symptom-checker".to_string(),
            basic: "symptoms".to_string(),
            detailed: "detailed_symptoms".to_string(),
        }
    }
}

/// MongoDB-backed repository.
///
/// The driver client is created on first use and shared by every later
/// call until [`SymptomRepository::shutdown`] closes it.
pub struct MongoSymptomRepository {
    uri: String,
    collections: MongoCollections,
    client: OnceCell<Client>,
}

impl MongoSymptomRepository {
    pub fn new(uri: impl Into<String>, collections: MongoCollections) -> Self {
        Self {
            uri: uri.into(),
            collections,
            client: OnceCell::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }

    async fn client(&self) -> Result<&Client, RepositoryError> {
        self.client
            .get_or_try_init(|| async {
                let client = Client::with_uri_str(&self.uri)
                    .await
                    .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
                info!(database = %self.collections.database, "MongoDB client initialized");
                Ok::<_, RepositoryError>(client)
            })
            .await
    }

    async fn collection(
        &self,
        kind: RecordKind,
    ) -> Result<Collection<SymptomDocument>, RepositoryError> {
        let name = match kind {
            RecordKind::Basic => &self.collections.basic,
            RecordKind::Detailed => &self.collections.detailed,
        };
        Ok(self
            .client()
            .await?
            .database(&self.collections.database)
            .collection(name))
    }
}

fn to_document(record: &SymptomRecord) -> Result<SymptomDocument, RepositoryError> {
    let response =
        bson::to_bson(&record.response).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    Ok(SymptomDocument {
        id: None,
        prompt: record.prompt.clone(),
        response,
        created_at: record.created_at,
    })
}

fn from_document(kind: RecordKind, document: SymptomDocument) -> SymptomRecord {
    SymptomRecord {
        id: document.id.map(|oid| RecordId::new(oid.to_hex())),
        kind,
        prompt: document.prompt,
        response: document.response.into_relaxed_extjson(),
        created_at: document.created_at,
    }
}

#[async_trait]
impl SymptomRepository for MongoSymptomRepository {
    #[instrument(skip(self, record), fields(kind = %record.kind))]
    async fn insert(&self, record: &SymptomRecord) -> Result<RecordId, RepositoryError> {
        let document = to_document(record)?;
        let collection = self.collection(record.kind).await?;

        let result = collection
            .insert_one(&document)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };

        Ok(RecordId::new(id))
    }

    #[instrument(skip(self), fields(kind = %kind, limit = %limit))]
    async fn recent(
        &self,
        kind: RecordKind,
        limit: usize,
    ) -> Result<Vec<SymptomRecord>, RepositoryError> {
        let collection = self.collection(kind).await?;

        let cursor = collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .limit(limit as i64)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let documents: Vec<SymptomDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        info!(count = documents.len(), "Loaded symptom history");

        Ok(documents
            .into_iter()
            .map(|d| from_document(kind, d))
            .collect())
    }

    async fn shutdown(&self) {
        if let Some(client) = self.client.get() {
            client.clone().shutdown().await;
            info!("MongoDB client shut down");
        }
    }
}
