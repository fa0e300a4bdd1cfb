mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, FeatureFlags, IdentitySettings, LlmSettings, LoggingSettings,
    PersistenceBackend, ProviderCredentials, ServerSettings, Settings, TranscriptionSettings,
};
