use crate::domain::SymptomRecord;

/// Longest slice of an earlier symptom description quoted back to the model.
const MAX_HISTORY_EXCERPT_CHARS: usize = 300;

pub const TRIAGE_INSTRUCTIONS: &str = r#"You are a helpful health assistant.
Respond ONLY in JSON format with this structure:

{
  "urgency": "low/medium/high",
  "suggestion": "advice here",
  "next_steps": "when to see a doctor"
}

The "urgency" value must be exactly one of: low, medium, high.
Detect the language of the user's input and write "suggestion" and "next_steps" in that language.
Do NOT include markdown, explanations, or any text outside JSON.
Do NOT diagnose."#;

pub const DETAILED_INSTRUCTIONS: &str = r#"You are a medical AI assistant. Your task is to provide detailed health insights.

Follow these rules strictly:

1. Respond only in JSON format with the following structure:
{
  "possible_conditions": "Explain possible causes in simple, non-alarming language.",
  "risk_factors": "List possible risk factors related to symptoms.",
  "lifestyle_recommendations": "Provide simple lifestyle or self-care tips.",
  "when_to_seek_immediate_care": "Mention clear signs for when to see a doctor or visit ER."
}

2. Detect the language of the user's input and respond strictly in that language.
Do NOT translate, summarize, or switch languages under any circumstances.

3. Do NOT include markdown, code blocks, or extra text outside JSON.

4. Keep explanations short, helpful, and reassuring.
Never diagnose or guarantee conditions."#;

const HISTORY_INSTRUCTIONS: &str = r#"5. The user has checked symptoms before. Their earlier descriptions, newest first:
{history}
Add two more fields to the same JSON object:
  "historical_insights": "Patterns or changes compared with the earlier descriptions.",
  "monitoring_suggestions": "What to keep track of over the coming days.""#;

pub fn build_triage_prompt(symptoms: &str) -> String {
    format!("{}\nUser: {}", TRIAGE_INSTRUCTIONS, symptoms.trim())
}

pub fn build_detailed_prompt(symptoms: &str, history: &[SymptomRecord]) -> String {
    if history.is_empty() {
        return format!("{}\nUser: {}", DETAILED_INSTRUCTIONS, symptoms.trim());
    }

    let listed = history
        .iter()
        .enumerate()
        .map(|(i, record)| {
            format!(
                "{}. ({}) {}",
                i + 1,
                record.created_at.format("%Y-%m-%d"),
                excerpt(&record.prompt)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{}\nUser: {}",
        DETAILED_INSTRUCTIONS,
        HISTORY_INSTRUCTIONS.replace("{history}", &listed),
        symptoms.trim()
    )
}

fn excerpt(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= MAX_HISTORY_EXCERPT_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(MAX_HISTORY_EXCERPT_CHARS).collect();
    format!("{}...", cut)
}
