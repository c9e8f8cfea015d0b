use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::constants::VPROFILE_STATUS_HEADER;
use crate::search::SearchError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("embedding provider error: {0}")]
    ProviderError(String),

    #[error("corpus unavailable: {0}")]
    CorpusUnavailable(String),

    #[error("search cancelled")]
    Cancelled,

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<SearchError> for GatewayError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::EmbeddingUnavailable(_) => GatewayError::ProviderError(err.to_string()),
            SearchError::Corpus(_) => GatewayError::CorpusUnavailable(err.to_string()),
            SearchError::Cancelled => GatewayError::Cancelled,
            SearchError::DimensionMismatch { .. } | SearchError::InvalidConfig { .. } => {
                GatewayError::InternalError(err.to_string())
            }
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::ProviderError(_) => StatusCode::BAD_GATEWAY,
            GatewayError::CorpusUnavailable(_)
            | GatewayError::Cancelled
            | GatewayError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn status_label(&self) -> &'static str {
        match self {
            GatewayError::InvalidRequest(_) => "invalid_request",
            GatewayError::ProviderError(_) => "provider_error",
            GatewayError::CorpusUnavailable(_) => "corpus_error",
            GatewayError::Cancelled => "cancelled",
            GatewayError::InternalError(_) => "internal_error",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut headers = HeaderMap::new();
        headers.insert(
            VPROFILE_STATUS_HEADER,
            HeaderValue::from_static(self.status_label()),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
