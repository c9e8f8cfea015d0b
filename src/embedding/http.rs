//! HTTP embedding provider client.
//!
//! Wire contract: `POST {base_url}/embed` with `{"input": "...", "type": "query"}`
//! and an optional `token` header; the provider answers `{"embedding": [...]}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{DEFAULT_EMBEDDING_TIMEOUT_MS, DEFAULT_EMBEDDING_URL};

use super::{EmbeddingError, EmbeddingGateway, VectorLookup};

const EMBED_PATH: &str = "/embed";
const TOKEN_HEADER: &str = "token";
const INPUT_TYPE_QUERY: &str = "query";

#[derive(Debug, Clone)]
pub struct HttpEmbeddingConfig {
    /// Provider base URL, without the `/embed` path.
    pub base_url: String,
    /// Sent as the `token` header when set.
    pub token: Option<String>,
    /// Bound on the whole request, body included.
    pub timeout: Duration,
}

impl Default for HttpEmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EMBEDDING_URL.to_string(),
            token: None,
            timeout: Duration::from_millis(DEFAULT_EMBEDDING_TIMEOUT_MS),
        }
    }
}

impl HttpEmbeddingConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn embed_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), EMBED_PATH)
    }

    pub fn validate(&self) -> Result<(), EmbeddingError> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!("base_url must be an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.timeout.is_zero() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "timeout must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    input: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    #[serde(default)]
    embedding: Option<Vec<f64>>,
}

pub struct HttpEmbeddingGateway {
    http: HttpClient,
    config: HttpEmbeddingConfig,
    url: String,
}

impl std::fmt::Debug for HttpEmbeddingGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEmbeddingGateway")
            .field("url", &self.url)
            .field("timeout", &self.config.timeout)
            .field("has_token", &self.config.token.is_some())
            .finish()
    }
}

impl HttpEmbeddingGateway {
    pub fn new(config: HttpEmbeddingConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EmbeddingError::InvalidConfig {
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        let url = config.embed_url();
        Ok(Self { http, config, url })
    }

    pub fn config(&self) -> &HttpEmbeddingConfig {
        &self.config
    }

    fn map_transport_error(&self, err: reqwest::Error) -> EmbeddingError {
        if err.is_timeout() {
            EmbeddingError::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else {
            EmbeddingError::unavailable(err.to_string())
        }
    }
}

impl VectorLookup for HttpEmbeddingGateway {}

#[async_trait]
impl EmbeddingGateway for HttpEmbeddingGateway {
    async fn embed_text(&self, text: &str) -> Result<Vec<f64>, EmbeddingError> {
        let mut request = self.http.post(&self.url).json(&EmbedRequest {
            input: text,
            kind: INPUT_TYPE_QUERY,
        });
        if let Some(token) = &self.config.token {
            request = request.header(TOKEN_HEADER, token);
        }

        let response = request.send().await.map_err(|e| {
            let err = self.map_transport_error(e);
            warn!(url = %self.url, error = %err, "Embedding request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, %status, "Embedding provider returned an error status");
            return Err(EmbeddingError::unavailable(format!(
                "provider returned HTTP {}",
                status
            )));
        }

        let body: EmbedResponse = response
            .json()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        match body.embedding {
            Some(vector) if !vector.is_empty() => {
                debug!(text_len = text.len(), dim = vector.len(), "Embedded text");
                Ok(vector)
            }
            _ => Err(EmbeddingError::unavailable(
                "provider response carried no embedding",
            )),
        }
    }
}
