use symptom_checker::presentation::config::DatabaseSettings;
use symptom_checker::presentation::{
    AppState, Environment, PersistenceBackend, ProviderCredentials, Settings,
};

fn database(backend: Option<PersistenceBackend>, uri: Option<&str>) -> DatabaseSettings {
    DatabaseSettings {
        backend,
        uri: uri.map(String::from),
        name: "symptom-checker".to_string(),
        symptoms_collection: "symptoms".to_string(),
        detailed_collection: "detailed_symptoms".to_string(),
        history_limit: 50,
        history_context_entries: 5,
    }
}

#[test]
fn given_no_credentials_when_loading_settings_then_uses_defaults_and_disables_features() {
    let settings = Settings::load_with(Environment::Test, ProviderCredentials::default()).unwrap();

    assert_eq!(settings.llm.model, "gemini-2.0-flash");
    assert_eq!(settings.transcription.model_id, "scribe_v1");
    assert_eq!(settings.database.history_limit, 50);
    assert_eq!(settings.database.symptoms_collection, "symptoms");

    let features = settings.features();
    assert!(!features.ai);
    assert!(!features.transcription);
    assert!(!features.persistence);
    assert!(!features.identity);
}

#[test]
fn given_provider_credentials_when_loading_settings_then_enables_features() {
    let credentials = ProviderCredentials {
        gemini_api_key: Some("gemini-key".to_string()),
        elevenlabs_api_key: Some("eleven-key".to_string()),
        mongodb_uri: Some("mongodb://localhost:27017".to_string()),
        auth0_domain: Some("example.auth0.com".to_string()),
        auth0_client_id: Some("client".to_string()),
        auth0_client_secret: Some("secret".to_string()),
        server_port: Some("8088".to_string()),
    };

    let settings = Settings::load_with(Environment::Test, credentials).unwrap();

    assert_eq!(settings.server.port, 8088);
    assert_eq!(settings.llm.api_key(), Some("gemini-key"));
    assert_eq!(
        settings.database.resolved_backend(),
        PersistenceBackend::Mongo
    );
    let features = settings.features();
    assert!(features.ai && features.transcription && features.persistence && features.identity);
}

#[test]
fn given_blank_api_key_when_reading_then_treated_as_missing() {
    let mut settings =
        Settings::load_with(Environment::Test, ProviderCredentials::default()).unwrap();
    settings.llm.api_key = Some("   ".to_string());

    assert_eq!(settings.llm.api_key(), None);
    assert!(!settings.features().ai);
}

#[test]
fn given_backend_choices_when_resolving_then_applies_precedence() {
    assert_eq!(
        database(None, None).resolved_backend(),
        PersistenceBackend::Disabled
    );
    assert_eq!(
        database(None, Some("mongodb://db")).resolved_backend(),
        PersistenceBackend::Mongo
    );
    assert_eq!(
        database(Some(PersistenceBackend::Memory), Some("mongodb://db")).resolved_backend(),
        PersistenceBackend::Memory
    );
    assert_eq!(
        database(Some(PersistenceBackend::Mongo), None).resolved_backend(),
        PersistenceBackend::Disabled
    );
}

#[test]
fn given_settings_without_credentials_when_building_state_then_services_are_unconfigured() {
    let settings = Settings::load_with(Environment::Test, ProviderCredentials::default()).unwrap();

    let state = AppState::from_settings(settings);

    assert!(!state.triage_service.is_configured());
    assert!(!state.voice_service.is_configured());
    assert!(!state.symptom_journal.is_enabled());
}

#[tokio::test]
async fn given_mongo_uri_when_building_state_then_journal_is_enabled_without_connecting() {
    let credentials = ProviderCredentials {
        mongodb_uri: Some("mongodb://127.0.0.1:1".to_string()),
        ..ProviderCredentials::default()
    };
    let settings = Settings::load_with(Environment::Test, credentials).unwrap();

    let state = AppState::from_settings(settings);

    assert!(state.symptom_journal.is_enabled());
}
