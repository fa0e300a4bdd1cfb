use chrono::{Duration, Utc};
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage};

use symptom_checker::application::ports::SymptomRepository;
use symptom_checker::domain::{
    DetailedAnalysis, RecordKind, StructuredResponse, SymptomRecord, TriageResult,
};
use symptom_checker::infrastructure::persistence::{MongoCollections, MongoSymptomRepository};

const MONGO_PORT: u16 = 27017;

struct TestMongo {
    _container: ContainerAsync<GenericImage>,
    repository: MongoSymptomRepository,
}

impl TestMongo {
    async fn new() -> Self {
        let container = GenericImage::new("mongo", "7")
            .with_exposed_port(MONGO_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Waiting for connections"))
            .start()
            .await
            .expect("Failed to start mongo container");

        let port = container
            .get_host_port_ipv4(MONGO_PORT)
            .await
            .expect("Failed to read mongo port");

        let repository = MongoSymptomRepository::new(
            format!("mongodb://127.0.0.1:{}", port),
            MongoCollections::default(),
        );

        Self {
            _container: container,
            repository,
        }
    }
}

fn basic_record(prompt: &str, minutes_ago: i64) -> SymptomRecord {
    let mut record =
        SymptomRecord::new(RecordKind::Basic, prompt, &TriageResult::fallback()).unwrap();
    record.created_at = Utc::now() - Duration::minutes(minutes_ago);
    record
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_mongo_container_when_inserting_records_then_recent_returns_newest_first() {
    let mongo = TestMongo::new().await;

    mongo.repository.insert(&basic_record("older", 30)).await.unwrap();
    mongo.repository.insert(&basic_record("newest", 1)).await.unwrap();
    mongo.repository.insert(&basic_record("middle", 10)).await.unwrap();

    let recent = mongo.repository.recent(RecordKind::Basic, 2).await.unwrap();

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].prompt, "newest");
    assert_eq!(recent[1].prompt, "middle");
    assert!(recent.iter().all(|r| r.id.is_some()));
    assert_eq!(recent[0].response["urgency"], "medium");

    mongo.repository.shutdown().await;
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_detailed_record_when_reading_basic_history_then_collections_are_separate() {
    let mongo = TestMongo::new().await;
    let detailed =
        SymptomRecord::new(RecordKind::Detailed, "detailed", &DetailedAnalysis::fallback())
            .unwrap();

    mongo.repository.insert(&basic_record("basic", 1)).await.unwrap();
    mongo.repository.insert(&detailed).await.unwrap();

    let basic = mongo.repository.recent(RecordKind::Basic, 50).await.unwrap();
    let detailed = mongo
        .repository
        .recent(RecordKind::Detailed, 50)
        .await
        .unwrap();

    assert_eq!(basic.len(), 1);
    assert_eq!(basic[0].prompt, "basic");
    assert_eq!(detailed.len(), 1);
    assert!(detailed[0].response["possible_conditions"].is_string());

    mongo.repository.shutdown().await;
}

#[tokio::test]
async fn given_unreachable_server_when_reading_then_returns_error() {
    let repository = MongoSymptomRepository::new(
        "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200",
        MongoCollections::default(),
    );
    assert!(!repository.is_connected());

    let result = repository.recent(RecordKind::Basic, 1).await;

    assert!(result.is_err());
}
