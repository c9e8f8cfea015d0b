use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("embedding provider timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("invalid embedding configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl EmbeddingError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        EmbeddingError::Unavailable {
            reason: reason.into(),
        }
    }
}
