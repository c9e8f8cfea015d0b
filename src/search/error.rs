use thiserror::Error;

use crate::corpus::CorpusError;
use crate::embedding::EmbeddingError;
use crate::ranking::RankingError;
use crate::vector::VectorError;

/// Caller-visible failure of a search.
///
/// Anything not listed here (missing candidate vectors, nothing above the
/// threshold, unparsable experience) is absorbed and only changes which
/// candidates come back.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("query could not be embedded: {0}")]
    EmbeddingUnavailable(#[source] EmbeddingError),

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("search cancelled")]
    Cancelled,

    #[error("invalid search configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<EmbeddingError> for SearchError {
    fn from(err: EmbeddingError) -> Self {
        SearchError::EmbeddingUnavailable(err)
    }
}

impl From<VectorError> for SearchError {
    fn from(err: VectorError) -> Self {
        match err {
            VectorError::DimensionMismatch { expected, actual } => {
                SearchError::DimensionMismatch { expected, actual }
            }
            VectorError::Empty => SearchError::EmbeddingUnavailable(EmbeddingError::unavailable(
                "no concept vectors to combine",
            )),
        }
    }
}

impl From<RankingError> for SearchError {
    fn from(err: RankingError) -> Self {
        match err {
            RankingError::Vector { source, .. } => source.into(),
            RankingError::Cancelled => SearchError::Cancelled,
            RankingError::InvalidConfig { reason } => SearchError::InvalidConfig { reason },
        }
    }
}

#[derive(Debug, Error)]
pub enum QueryLogError {
    #[error("query log write failed: {reason}")]
    WriteFailed { reason: String },
}

impl From<std::io::Error> for QueryLogError {
    fn from(err: std::io::Error) -> Self {
        QueryLogError::WriteFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for QueryLogError {
    fn from(err: serde_json::Error) -> Self {
        QueryLogError::WriteFailed {
            reason: err.to_string(),
        }
    }
}
