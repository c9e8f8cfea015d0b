use thiserror::Error;

use crate::vector::VectorError;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("candidate {candidate_id}: {source}")]
    Vector {
        candidate_id: u64,
        #[source]
        source: VectorError,
    },

    #[error("ranking cancelled")]
    Cancelled,

    #[error("invalid ranking configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type RankingResult<T> = Result<T, RankingError>;
