//! OpenAI-compatible chat-completion client.
//!
//! Wire contract: `POST {base_url}/chat/completions` with bearer auth and
//! `{"model", "messages": [{"role": "user", "content"}], "temperature", "max_tokens"}`;
//! the reply text is read from `choices[0].message.content`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{DEFAULT_JD_API_URL, DEFAULT_JD_MODEL, DEFAULT_JD_TIMEOUT_MS};

use super::{CompletionProvider, JdError};

const COMPLETIONS_PATH: &str = "/chat/completions";
const ROLE_USER: &str = "user";
const TEMPERATURE: f32 = 0.1;
const MAX_TOKENS: u32 = 1000;

#[derive(Debug, Clone)]
pub struct ChatCompletionConfig {
    /// API base URL, without the `/chat/completions` path.
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl ChatCompletionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_JD_API_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_JD_MODEL.to_string(),
            timeout: Duration::from_millis(DEFAULT_JD_TIMEOUT_MS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn completions_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            COMPLETIONS_PATH
        )
    }

    pub fn validate(&self) -> Result<(), JdError> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(JdError::InvalidConfig {
                reason: format!("base_url must be an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.api_key.trim().is_empty() {
            return Err(JdError::InvalidConfig {
                reason: "api_key must not be empty".to_string(),
            });
        }
        if self.model.trim().is_empty() {
            return Err(JdError::InvalidConfig {
                reason: "model must not be empty".to_string(),
            });
        }
        if self.timeout.is_zero() {
            return Err(JdError::InvalidConfig {
                reason: "timeout must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

pub struct ChatCompletionClient {
    http: HttpClient,
    config: ChatCompletionConfig,
    url: String,
}

impl std::fmt::Debug for ChatCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionClient")
            .field("url", &self.url)
            .field("model", &self.config.model)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

impl ChatCompletionClient {
    pub fn new(config: ChatCompletionConfig) -> Result<Self, JdError> {
        config.validate()?;

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| JdError::InvalidConfig {
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        let url = config.completions_url();
        Ok(Self { http, config, url })
    }

    pub fn config(&self) -> &ChatCompletionConfig {
        &self.config
    }

    fn map_transport_error(&self, err: reqwest::Error) -> JdError {
        if err.is_timeout() {
            JdError::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else if err.is_decode() {
            JdError::malformed(err.to_string())
        } else {
            JdError::unavailable(err.to_string())
        }
    }
}

#[async_trait]
impl CompletionProvider for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, JdError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: ROLE_USER,
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let err = self.map_transport_error(e);
                warn!(url = %self.url, error = %err, "Completion request failed");
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, %status, "Completion provider returned an error status");
            return Err(JdError::unavailable(format!(
                "provider returned HTTP {}",
                status
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| JdError::malformed("reply carried no message content"))?;

        debug!(model = %self.config.model, reply_len = content.len(), "Completion received");
        Ok(content)
    }
}
