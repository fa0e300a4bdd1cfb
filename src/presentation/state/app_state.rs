use std::sync::Arc;

use crate::application::ports::{LlmClient, SymptomRepository, TranscriptionEngine};
use crate::application::services::{SymptomJournal, TriageService, VoiceService};
use crate::infrastructure::audio::ElevenLabsEngine;
use crate::infrastructure::llm::GeminiClient;
use crate::infrastructure::persistence::{
    InMemorySymptomRepository, MongoCollections, MongoSymptomRepository,
};
use crate::presentation::config::{PersistenceBackend, Settings};

#[derive(Clone)]
pub struct AppState {
    pub triage_service: Arc<TriageService>,
    pub voice_service: Arc<VoiceService>,
    pub symptom_journal: Arc<SymptomJournal>,
    pub settings: Settings,
}

impl AppState {
    /// Wires provider clients for every integration that has credentials.
    ///
    /// No network I/O happens here; the Mongo client connects on first use.
    pub fn from_settings(settings: Settings) -> Self {
        let llm_client: Option<Arc<dyn LlmClient>> = settings.llm.api_key().map(|key| {
            Arc::new(GeminiClient::new(
                key.to_string(),
                settings.llm.base_url.clone(),
                Some(settings.llm.model.clone()),
            )) as Arc<dyn LlmClient>
        });

        let transcription_engine: Option<Arc<dyn TranscriptionEngine>> =
            settings.transcription.api_key().map(|key| {
                Arc::new(ElevenLabsEngine::new(
                    key.to_string(),
                    settings.transcription.base_url.clone(),
                    Some(settings.transcription.model_id.clone()),
                )) as Arc<dyn TranscriptionEngine>
            });

        let database = &settings.database;
        let repository: Option<Arc<dyn SymptomRepository>> = match database.resolved_backend() {
            PersistenceBackend::Mongo => database.uri().map(|uri| {
                Arc::new(MongoSymptomRepository::new(
                    uri,
                    MongoCollections {
                        database: database.name.clone(),
                        basic: database.symptoms_collection.clone(),
                        detailed: database.detailed_collection.clone(),
                    },
                )) as Arc<dyn SymptomRepository>
            }),
            PersistenceBackend::Memory => {
                Some(Arc::new(InMemorySymptomRepository::new()) as Arc<dyn SymptomRepository>)
            }
            PersistenceBackend::Disabled => None,
        };

        Self {
            triage_service: Arc::new(TriageService::new(llm_client)),
            voice_service: Arc::new(VoiceService::new(transcription_engine)),
            symptom_journal: Arc::new(SymptomJournal::new(repository, database.history_limit)),
            settings,
        }
    }
}
