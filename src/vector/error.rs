use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("no vectors provided")]
    Empty,
}

pub type VectorResult<T> = Result<T, VectorError>;
