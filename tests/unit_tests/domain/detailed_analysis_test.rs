use symptom_checker::domain::{
    DetailedAnalysis, FALLBACK_POSSIBLE_CONDITIONS, FALLBACK_WHEN_TO_SEEK_CARE, StructuredResponse,
};

#[test]
fn given_list_fields_when_decoding_then_joins_with_newlines() {
    let json = r#"{
        "possible_conditions": ["Migraine", "Tension headache"],
        "risk_factors": "Stress",
        "lifestyle_recommendations": ["Sleep", "Hydrate"],
        "when_to_seek_immediate_care": "Sudden severe pain"
    }"#;

    let analysis: DetailedAnalysis = serde_json::from_str(json).unwrap();

    assert_eq!(analysis.possible_conditions, "Migraine\nTension headache");
    assert_eq!(analysis.lifestyle_recommendations, "Sleep\nHydrate");
    assert_eq!(analysis.historical_insights, None);
}

#[test]
fn given_missing_required_field_when_decoding_then_fails() {
    let json = r#"{
        "possible_conditions": "Migraine",
        "risk_factors": "Stress",
        "lifestyle_recommendations": "Sleep"
    }"#;

    assert!(serde_json::from_str::<DetailedAnalysis>(json).is_err());
}

#[test]
fn given_numeric_field_when_decoding_then_fails() {
    let json = r#"{
        "possible_conditions": 42,
        "risk_factors": "Stress",
        "lifestyle_recommendations": "Sleep",
        "when_to_seek_immediate_care": "Now"
    }"#;

    assert!(serde_json::from_str::<DetailedAnalysis>(json).is_err());
}

#[test]
fn given_fallback_when_serializing_then_omits_optional_fields() {
    let value = serde_json::to_value(DetailedAnalysis::fallback()).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 4);
    assert_eq!(object["possible_conditions"], FALLBACK_POSSIBLE_CONDITIONS);
    assert_eq!(object["when_to_seek_immediate_care"], FALLBACK_WHEN_TO_SEEK_CARE);
}

#[test]
fn given_history_fields_when_decoding_then_keeps_them() {
    let json = r#"{
        "possible_conditions": "a",
        "risk_factors": "b",
        "lifestyle_recommendations": "c",
        "when_to_seek_immediate_care": "d",
        "historical_insights": "Headaches are becoming more frequent.",
        "monitoring_suggestions": ["Keep a headache diary"]
    }"#;

    let analysis: DetailedAnalysis = serde_json::from_str(json).unwrap();

    assert_eq!(
        analysis.historical_insights.as_deref(),
        Some("Headaches are becoming more frequent.")
    );
    assert_eq!(
        analysis.monitoring_suggestions.as_deref(),
        Some("Keep a headache diary")
    );
}
