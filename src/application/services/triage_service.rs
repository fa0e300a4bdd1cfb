use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{DetailedAnalysis, StructuredResponse, SymptomRecord, TriageResult};

use super::prompt_templates::{build_detailed_prompt, build_triage_prompt};
use super::response_parser::parse_structured;

/// Asks the generative model for structured triage answers.
///
/// Never fails: any provider or decoding problem yields the shape's fallback
/// together with the reason it was used.
pub struct TriageService {
    llm_client: Option<Arc<dyn LlmClient>>,
}

impl TriageService {
    pub fn new(llm_client: Option<Arc<dyn LlmClient>>) -> Self {
        Self { llm_client }
    }

    pub fn is_configured(&self) -> bool {
        self.llm_client.is_some()
    }

    #[tracing::instrument(skip_all)]
    pub async fn assess_triage(&self, symptoms: &str) -> Assessment<TriageResult> {
        self.assess(&build_triage_prompt(symptoms)).await
    }

    #[tracing::instrument(skip_all, fields(history_entries = history.len()))]
    pub async fn assess_detailed(
        &self,
        symptoms: &str,
        history: &[SymptomRecord],
    ) -> Assessment<DetailedAnalysis> {
        self.assess(&build_detailed_prompt(symptoms, history)).await
    }

    async fn assess<T: StructuredResponse>(&self, prompt: &str) -> Assessment<T> {
        let Some(client) = &self.llm_client else {
            tracing::warn!(shape = T::LABEL, "AI provider not configured, using default response");
            return Assessment::fallback(FallbackReason::NotConfigured);
        };

        match request::<T>(client.as_ref(), prompt).await {
            Ok(result) => {
                tracing::info!(shape = T::LABEL, "AI response decoded");
                Assessment::generated(result)
            }
            Err(e) => {
                tracing::error!(error = %e, shape = T::LABEL, "AI response unusable, using default response");
                Assessment::fallback(FallbackReason::Failed(e.to_string()))
            }
        }
    }
}

async fn request<T: StructuredResponse>(
    client: &dyn LlmClient,
    prompt: &str,
) -> Result<T, LlmClientError> {
    let raw = client.generate(prompt).await?;
    tracing::debug!(chars = raw.len(), "Raw model reply received");
    parse_structured(&raw)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    NotConfigured,
    Failed(String),
}

impl FallbackReason {
    /// Text safe to show to the end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            FallbackReason::NotConfigured => "AI provider not configured, showing default guidance",
            FallbackReason::Failed(_) => "AI response unavailable, showing default guidance",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Assessment<T> {
    pub result: T,
    pub fallback_reason: Option<FallbackReason>,
}

impl<T: StructuredResponse> Assessment<T> {
    fn generated(result: T) -> Self {
        Self {
            result,
            fallback_reason: None,
        }
    }

    fn fallback(reason: FallbackReason) -> Self {
        Self {
            result: T::fallback(),
            fallback_reason: Some(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}
