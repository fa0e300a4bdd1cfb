use crate::application::ports::LlmClientError;
use crate::domain::StructuredResponse;

/// Removes markdown code-fence markers the model wraps around JSON.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Decodes a model reply into a complete `T`.
///
/// Missing fields, wrong types and truncated JSON are all errors; no partial
/// value is ever produced.
pub fn parse_structured<T: StructuredResponse>(raw: &str) -> Result<T, LlmClientError> {
    let cleaned = strip_code_fences(raw);

    if cleaned.is_empty() {
        return Err(LlmClientError::EmptyResponse);
    }

    if !cleaned.starts_with('{') {
        return Err(LlmClientError::InvalidResponse(format!(
            "{} reply is not a JSON object",
            T::LABEL
        )));
    }

    serde_json::from_str::<T>(&cleaned).map_err(|e| {
        LlmClientError::InvalidResponse(format!("{} reply is not valid JSON: {}", T::LABEL, e))
    })
}
