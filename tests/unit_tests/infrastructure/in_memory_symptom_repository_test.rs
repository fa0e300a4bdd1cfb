use chrono::{Duration, Utc};

use symptom_checker::application::ports::SymptomRepository;
use symptom_checker::domain::{RecordKind, StructuredResponse, SymptomRecord, TriageResult};
use symptom_checker::infrastructure::persistence::InMemorySymptomRepository;

fn record(prompt: &str, minutes_ago: i64) -> SymptomRecord {
    let mut record =
        SymptomRecord::new(RecordKind::Basic, prompt, &TriageResult::fallback()).unwrap();
    record.created_at = Utc::now() - Duration::minutes(minutes_ago);
    record
}

#[tokio::test]
async fn given_out_of_order_inserts_when_reading_recent_then_sorts_by_timestamp_desc() {
    let repository = InMemorySymptomRepository::new();
    repository.insert(&record("middle", 10)).await.unwrap();
    repository.insert(&record("oldest", 20)).await.unwrap();
    repository.insert(&record("newest", 1)).await.unwrap();

    let recent = repository.recent(RecordKind::Basic, 10).await.unwrap();

    let prompts: Vec<&str> = recent.iter().map(|r| r.prompt.as_str()).collect();
    assert_eq!(prompts, vec!["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn given_inserts_when_reading_recent_then_each_record_has_unique_id() {
    let repository = InMemorySymptomRepository::new();
    let first = repository.insert(&record("a", 1)).await.unwrap();
    let second = repository.insert(&record("b", 1)).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(repository.len().await, 2);
}

#[tokio::test]
async fn given_no_writes_when_reading_twice_then_results_are_identical() {
    let repository = InMemorySymptomRepository::new();
    repository.insert(&record("a", 3)).await.unwrap();
    repository.insert(&record("b", 2)).await.unwrap();

    let first = repository.recent(RecordKind::Basic, 50).await.unwrap();
    let second = repository.recent(RecordKind::Basic, 50).await.unwrap();

    assert_eq!(first, second);
}
