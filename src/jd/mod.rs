//! Job-description extraction.
//!
//! A recruiter uploads a plain-text job description; a chat-completion model
//! pulls out the required skills and experience. Extraction never fails from
//! the caller's point of view: any provider or parse failure yields
//! [`JdSummary::fallback`].
//!
//! - [`http`] talks to an OpenAI-compatible `/chat/completions` endpoint.
//! - [`mock`] returns canned replies for tests.

mod error;
pub mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod prompt;


use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{JD_EXTRACTION_FAILED, JD_NOT_SPECIFIED};

pub use error::JdError;
pub use http::{ChatCompletionClient, ChatCompletionConfig};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockCompletionProvider;
pub use prompt::{build_prompt, parse_summary};

/// Single-prompt text completion.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the assistant message for `prompt`. No internal retries.
    async fn complete(&self, prompt: &str) -> Result<String, JdError>;
}

/// Skills and experience requirements, each a comma-joined line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JdSummary {
    pub skills: String,
    pub experience: String,
}

impl JdSummary {
    pub fn new(skills: impl Into<String>, experience: impl Into<String>) -> Self {
        Self {
            skills: skills.into(),
            experience: experience.into(),
        }
    }

    /// Placeholder returned when extraction could not run.
    pub fn fallback() -> Self {
        Self::new(JD_EXTRACTION_FAILED, JD_NOT_SPECIFIED)
    }

    pub fn is_fallback(&self) -> bool {
        self.skills == JD_EXTRACTION_FAILED
    }

    /// Recruiter query built from the summary, suitable for the search
    /// pipeline. `None` when no skills were extracted.
    pub fn search_query(&self) -> Option<String> {
        if self.is_fallback() || self.skills == JD_NOT_SPECIFIED {
            return None;
        }
        if self.experience == JD_NOT_SPECIFIED {
            Some(self.skills.clone())
        } else {
            Some(format!("{} with {}", self.skills, self.experience))
        }
    }
}

/// Runs extraction against an optional [`CompletionProvider`].
#[derive(Clone, Default)]
pub struct JdExtractor {
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl std::fmt::Debug for JdExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JdExtractor")
            .field("configured", &self.provider.is_some())
            .finish()
    }
}

impl JdExtractor {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Extractor with no provider; every call returns the fallback.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Extracts requirements from `jd_text`, falling back on any failure.
    pub async fn extract(&self, jd_text: &str) -> JdSummary {
        match self.try_extract(jd_text).await {
            Ok(summary) => summary,
            Err(err) => {
                warn!(error = %err, "Job-description extraction failed, using fallback");
                JdSummary::fallback()
            }
        }
    }

    pub async fn try_extract(&self, jd_text: &str) -> Result<JdSummary, JdError> {
        let provider = self.provider.as_ref().ok_or(JdError::NotConfigured)?;
        let reply = provider.complete(&build_prompt(jd_text)).await?;
        let summary = parse_summary(&reply)?;
        debug!(
            text_len = jd_text.len(),
            skills = %summary.skills,
            experience = %summary.experience,
            "Extracted job-description requirements"
        );
        Ok(summary)
    }
}
