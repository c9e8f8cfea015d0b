use thiserror::Error;

#[derive(Debug, Error)]
pub enum JdError {
    #[error("job-description extraction is not configured")]
    NotConfigured,

    #[error("completion provider unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("completion provider timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("malformed extraction reply: {reason}")]
    Malformed { reason: String },

    #[error("invalid completion configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl JdError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        JdError::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        JdError::Malformed {
            reason: reason.into(),
        }
    }
}
