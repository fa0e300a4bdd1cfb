use chrono::{TimeZone, Utc};

use symptom_checker::application::services::prompt_templates::{
    DETAILED_INSTRUCTIONS, TRIAGE_INSTRUCTIONS, build_detailed_prompt, build_triage_prompt,
};
use symptom_checker::domain::{RecordKind, StructuredResponse, SymptomRecord, TriageResult};

fn record_at(prompt: &str, day: u32) -> SymptomRecord {
    let mut record =
        SymptomRecord::new(RecordKind::Basic, prompt, &TriageResult::fallback()).unwrap();
    record.created_at = Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap();
    record
}

#[test]
fn given_symptoms_when_building_triage_prompt_then_appends_user_line() {
    let prompt = build_triage_prompt("  I have a headache  ");

    assert!(prompt.starts_with(TRIAGE_INSTRUCTIONS));
    assert!(prompt.ends_with("\nUser: I have a headache"));
}

#[test]
fn given_triage_instructions_then_they_forbid_diagnosis_and_mirror_language() {
    assert!(TRIAGE_INSTRUCTIONS.contains("Do NOT diagnose"));
    assert!(TRIAGE_INSTRUCTIONS.contains("language"));
    assert!(TRIAGE_INSTRUCTIONS.contains("\"next_steps\""));
}

#[test]
fn given_no_history_when_building_detailed_prompt_then_omits_history_section() {
    let prompt = build_detailed_prompt("dizzy", &[]);

    assert!(prompt.starts_with(DETAILED_INSTRUCTIONS));
    assert!(!prompt.contains("historical_insights"));
    assert!(prompt.ends_with("\nUser: dizzy"));
}

#[test]
fn given_history_when_building_detailed_prompt_then_lists_entries_in_order() {
    let history = vec![record_at("fever since Monday", 12), record_at("sore throat", 10)];

    let prompt = build_detailed_prompt("fever and cough", &history);

    assert!(prompt.contains("1. (2026-03-12) fever since Monday"));
    assert!(prompt.contains("2. (2026-03-10) sore throat"));
    assert!(prompt.contains("historical_insights"));
    assert!(prompt.contains("monitoring_suggestions"));
    assert!(prompt.ends_with("\nUser: fever and cough"));
}

#[test]
fn given_long_history_entry_when_building_detailed_prompt_then_truncates_it() {
    let long = "é".repeat(400);
    let history = vec![record_at(&long, 1)];

    let prompt = build_detailed_prompt("still tired", &history);

    assert!(prompt.contains(&format!("{}...", "é".repeat(300))));
    assert!(!prompt.contains(&"é".repeat(301)));
}
