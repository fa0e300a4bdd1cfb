use symptom_checker::domain::{
    RecordId, RecordKind, StructuredResponse, SymptomRecord, TriageResult,
};

#[test]
fn given_triage_result_when_creating_record_then_response_holds_exact_shape() {
    let record =
        SymptomRecord::new(RecordKind::Basic, "sore throat", &TriageResult::fallback()).unwrap();

    let response = record.response.as_object().unwrap();
    let mut keys: Vec<&str> = response.keys().map(String::as_str).collect();
    keys.sort();

    assert_eq!(keys, vec!["next_steps", "suggestion", "urgency"]);
    assert_eq!(response["urgency"], "medium");
    assert_eq!(record.prompt, "sore throat");
    assert!(record.id.is_none());
}

#[test]
fn given_record_when_assigning_id_then_id_is_kept() {
    let record = SymptomRecord::new(RecordKind::Detailed, "cough", &TriageResult::fallback())
        .unwrap()
        .with_id(RecordId::new("abc123"));

    assert_eq!(record.id.as_ref().map(RecordId::as_str), Some("abc123"));
    assert_eq!(record.kind, RecordKind::Detailed);
}
