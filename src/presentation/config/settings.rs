use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};

use crate::application::services::DEFAULT_HISTORY_LIMIT;
use crate::infrastructure::audio::ElevenLabsEngine;
use crate::infrastructure::llm::GeminiClient;
use crate::infrastructure::observability::TracingConfig;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub transcription: TranscriptionSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub identity: IdentitySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Upper bound for request bodies; base64 voice clips are the largest.
    pub max_body_bytes: usize,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
}

impl LlmSettings {
    pub fn api_key(&self) -> Option<&str> {
        non_empty(&self.api_key)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub api_key: Option<String>,
    pub model_id: String,
    pub base_url: Option<String>,
}

impl TranscriptionSettings {
    pub fn api_key(&self) -> Option<&str> {
        non_empty(&self.api_key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceBackend {
    Disabled,
    Memory,
    #[serde(alias = "mongodb")]
    Mongo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub backend: Option<PersistenceBackend>,
    pub uri: Option<String>,
    pub name: String,
    pub symptoms_collection: String,
    pub detailed_collection: String,
    pub history_limit: usize,
    pub history_context_entries: usize,
}

impl DatabaseSettings {
    pub fn uri(&self) -> Option<&str> {
        non_empty(&self.uri)
    }

    /// An explicit backend wins; otherwise Mongo when a URI is present.
    /// Mongo without a URI degrades to disabled.
    pub fn resolved_backend(&self) -> PersistenceBackend {
        match (self.backend, self.uri()) {
            (Some(PersistenceBackend::Mongo), None) => PersistenceBackend::Disabled,
            (Some(backend), _) => backend,
            (None, Some(_)) => PersistenceBackend::Mongo,
            (None, None) => PersistenceBackend::Disabled,
        }
    }
}

/// Identity-provider (Auth0) credentials. The service only reports whether
/// they are present; login is handled by the UI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentitySettings {
    pub domain: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl IdentitySettings {
    pub fn is_configured(&self) -> bool {
        non_empty(&self.domain).is_some()
            && non_empty(&self.client_id).is_some()
            && non_empty(&self.client_secret).is_some()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

/// Which optional integrations have credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub ai: bool,
    pub transcription: bool,
    pub persistence: bool,
    pub identity: bool,
}

/// Provider variables recognised under their conventional names.
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    pub gemini_api_key: Option<String>,
    pub elevenlabs_api_key: Option<String>,
    pub mongodb_uri: Option<String>,
    pub auth0_domain: Option<String>,
    pub auth0_client_id: Option<String>,
    pub auth0_client_secret: Option<String>,
    pub server_port: Option<String>,
}

impl ProviderCredentials {
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            gemini_api_key: var("GEMINI_API_KEY"),
            elevenlabs_api_key: var("ELEVENLABS_API_KEY"),
            mongodb_uri: var("MONGODB_URI"),
            auth0_domain: var("AUTH0_DOMAIN"),
            auth0_client_id: var("AUTH0_CLIENT_ID"),
            auth0_client_secret: var("AUTH0_CLIENT_SECRET"),
            server_port: var("SERVER_PORT"),
        }
    }
}

impl Settings {
    /// Defaults, then `config/appsettings.<env>.toml`, then `APP__*`
    /// variables, then the conventional provider variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_with(environment, ProviderCredentials::from_env())
    }

    pub fn load_with(
        environment: Environment,
        credentials: ProviderCredentials,
    ) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("llm.api_key", credentials.gemini_api_key)?
            .set_override_option("transcription.api_key", credentials.elevenlabs_api_key)?
            .set_override_option("database.uri", credentials.mongodb_uri)?
            .set_override_option("identity.domain", credentials.auth0_domain)?
            .set_override_option("identity.client_id", credentials.auth0_client_id)?
            .set_override_option("identity.client_secret", credentials.auth0_client_secret)?
            .set_override_option("server.port", credentials.server_port)?
            .build()?
            .try_deserialize()
    }

    pub fn features(&self) -> FeatureFlags {
        FeatureFlags {
            ai: self.llm.api_key().is_some(),
            transcription: self.transcription.api_key().is_some(),
            persistence: self.database.resolved_backend() != PersistenceBackend::Disabled,
            identity: self.identity.is_configured(),
        }
    }

    pub fn tracing_config(&self, environment: Environment) -> TracingConfig {
        TracingConfig {
            environment: environment.to_string(),
            level: self.logging.level.clone(),
            json_format: self.logging.json,
        }
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000_i64)?
        .set_default("server.max_body_bytes", 25_i64 * 1024 * 1024)?
        .set_default("llm.model", GeminiClient::DEFAULT_MODEL)?
        .set_default("transcription.model_id", ElevenLabsEngine::DEFAULT_MODEL_ID)?
        .set_default("database.name", "symptom-checker")?
        .set_default("database.symptoms_collection", "symptoms")?
        .set_default("database.detailed_collection", "detailed_symptoms")?
        .set_default("database.history_limit", DEFAULT_HISTORY_LIMIT as i64)?
        .set_default("database.history_context_entries", 5_i64)?
        .set_default("logging.level", "info,symptom_checker=debug,tower_http=debug")?
        .set_default("logging.json", false)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
