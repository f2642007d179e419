//! Agent roles — thin, stateless wrappers over the `TextGenerator`
//! capability. Every response is untrusted text; structured output is
//! parsed defensively and validated downstream.

use std::sync::Arc;

use crate::errors::AppError;
use crate::llm_client::{parse_json_response, TextGenerator};
use crate::models::ContactCard;

pub mod prompts;

/// Summarizes a raw job description into a structured brief.
/// Called at most once per run; the retry driver caches the result.
pub struct JdSummarizer {
    backend: Arc<dyn TextGenerator>,
}

impl JdSummarizer {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self { backend }
    }

    pub async fn summarize(&self, job_description: &str) -> Result<String, AppError> {
        let prompt =
            prompts::SUMMARIZER_PROMPT_TEMPLATE.replace("{job_description}", job_description);
        self.backend
            .generate(prompts::SUMMARIZER_SYSTEM, &prompt, true)
            .await
            .map_err(|e| AppError::Llm(format!("job description summarization failed: {e}")))
    }
}

/// Extracts a structured candidate profile from formatted resume text.
/// The profile is free-form text passed on to the decision and contact
/// agents; no schema is guaranteed.
pub struct ProfileExtractor {
    backend: Arc<dyn TextGenerator>,
}

impl ProfileExtractor {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self { backend }
    }

    pub async fn extract(&self, cv_text: &str) -> Result<String, AppError> {
        let prompt = prompts::PROFILE_PROMPT_TEMPLATE.replace("{cv_text}", cv_text);
        self.backend
            .generate(prompts::PROFILE_SYSTEM, &prompt, true)
            .await
            .map_err(|e| AppError::Llm(format!("candidate profile extraction failed: {e}")))
    }
}

/// Produces the free-text hiring verdict for one candidate. The text is
/// classified by substring in `pipeline::decision`, not parsed.
pub struct HiringManager {
    backend: Arc<dyn TextGenerator>,
}

impl HiringManager {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self { backend }
    }

    pub async fn assess(&self, jd_summary: &str, profile: &str) -> Result<String, AppError> {
        let prompt = prompts::VERDICT_PROMPT_TEMPLATE
            .replace("{jd_summary}", jd_summary)
            .replace("{profile}", profile);
        self.backend
            .generate(prompts::VERDICT_SYSTEM, &prompt, false)
            .await
            .map_err(|e| AppError::Llm(format!("hiring decision failed: {e}")))
    }
}

/// Extracts the minimal contact projection for an accepted candidate.
pub struct ContactExtractor {
    backend: Arc<dyn TextGenerator>,
}

impl ContactExtractor {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self { backend }
    }

    pub async fn retrieve(&self, profile: &str) -> Result<ContactCard, AppError> {
        let prompt = prompts::CONTACT_PROMPT_TEMPLATE.replace("{profile}", profile);
        let response = self
            .backend
            .generate(prompts::CONTACT_SYSTEM, &prompt, true)
            .await
            .map_err(|e| AppError::Llm(format!("contact extraction failed: {e}")))?;
        parse_json_response(&response)
            .map_err(|e| AppError::Llm(format!("malformed contact card: {e}")))
    }
}

/// The four agent roles bundled for injection into the orchestrator.
pub struct AgentSet {
    pub summarizer: JdSummarizer,
    pub profiles: ProfileExtractor,
    pub manager: HiringManager,
    pub contacts: ContactExtractor,
}

impl AgentSet {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self {
            summarizer: JdSummarizer::new(Arc::clone(&backend)),
            profiles: ProfileExtractor::new(Arc::clone(&backend)),
            manager: HiringManager::new(Arc::clone(&backend)),
            contacts: ContactExtractor::new(backend),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    /// Deterministic backend returning a canned response regardless of
    /// input. Role-aware stubs live in the pipeline tests.
    struct CannedBackend(&'static str);

    #[async_trait]
    impl TextGenerator for CannedBackend {
        async fn generate(
            &self,
            _system: &str,
            _prompt: &str,
            _json_output: bool,
        ) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn contact_extractor_parses_fenced_json() {
        let backend = Arc::new(CannedBackend(
            "```json\n{\"candidate_id\": \"jdoe\", \"candidate_name\": \"Jane Doe\", \"candidate_mail\": \"jane@example.com\"}\n```",
        ));
        let agent = ContactExtractor::new(backend);
        let card = agent.retrieve("profile text").await.unwrap();
        assert_eq!(card.candidate_id.as_deref(), Some("jdoe"));
        assert_eq!(card.candidate_mail.as_deref(), Some("jane@example.com"));
    }

    #[tokio::test]
    async fn contact_extractor_tolerates_missing_fields() {
        let backend = Arc::new(CannedBackend("{\"candidate_name\": \"Jane Doe\"}"));
        let agent = ContactExtractor::new(backend);
        let card = agent.retrieve("profile text").await.unwrap();
        assert!(card.candidate_id.is_none());
        assert!(card.candidate_mail.is_none());
    }

    #[tokio::test]
    async fn contact_extractor_rejects_non_json() {
        let backend = Arc::new(CannedBackend("Jane Doe, jane@example.com"));
        let agent = ContactExtractor::new(backend);
        let err = agent.retrieve("profile text").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert!(err.is_candidate_scoped());
    }

    #[tokio::test]
    async fn verdict_prompt_carries_both_inputs() {
        struct EchoBackend;

        #[async_trait]
        impl TextGenerator for EchoBackend {
            async fn generate(
                &self,
                _system: &str,
                prompt: &str,
                _json_output: bool,
            ) -> Result<String, LlmError> {
                Ok(prompt.to_string())
            }
        }

        let agent = HiringManager::new(Arc::new(EchoBackend));
        let echoed = agent.assess("THE SUMMARY", "THE PROFILE").await.unwrap();
        assert!(echoed.contains("THE SUMMARY"));
        assert!(echoed.contains("THE PROFILE"));
    }
}
