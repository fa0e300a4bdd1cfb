use serde::{Deserialize, Deserializer, Serialize};

use super::StructuredResponse;

pub const FALLBACK_POSSIBLE_CONDITIONS: &str = "Common cold or mild infection.";
pub const FALLBACK_RISK_FACTORS: &str = "Recent exposure to illness or low immunity.";
pub const FALLBACK_LIFESTYLE_RECOMMENDATIONS: &str =
    "Rest, stay hydrated, and eat nutritious foods.";
pub const FALLBACK_WHEN_TO_SEEK_CARE: &str =
    "If high fever, chest pain, or breathing difficulty occurs.";

/// Extended analysis shown on the dashboard.
///
/// Models sometimes answer a text field with a list of bullet strings; those
/// are accepted and joined with newlines. Any other shape fails decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    #[serde(deserialize_with = "text_or_list")]
    pub possible_conditions: String,
    #[serde(deserialize_with = "text_or_list")]
    pub risk_factors: String,
    #[serde(deserialize_with = "text_or_list")]
    pub lifestyle_recommendations: String,
    #[serde(deserialize_with = "text_or_list")]
    pub when_to_seek_immediate_care: String,
    #[serde(
        default,
        deserialize_with = "optional_text_or_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub historical_insights: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_text_or_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub monitoring_suggestions: Option<String>,
}

impl StructuredResponse for DetailedAnalysis {
    const LABEL: &'static str = "detailed";

    fn fallback() -> Self {
        Self {
            possible_conditions: FALLBACK_POSSIBLE_CONDITIONS.to_string(),
            risk_factors: FALLBACK_RISK_FACTORS.to_string(),
            lifestyle_recommendations: FALLBACK_LIFESTYLE_RECOMMENDATIONS.to_string(),
            when_to_seek_immediate_care: FALLBACK_WHEN_TO_SEEK_CARE.to_string(),
            historical_insights: None,
            monitoring_suggestions: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    fn into_text(self) -> String {
        match self {
            TextOrList::Text(text) => text,
            TextOrList::List(items) => items.join("\n"),
        }
    }
}

fn text_or_list<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    TextOrList::deserialize(deserializer).map(TextOrList::into_text)
}

fn optional_text_or_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TextOrList>::deserialize(deserializer).map(|value| value.map(TextOrList::into_text))
}
