//! Embedding capability consumed by the search core.
//!
//! The core never runs an embedding model. It asks an [`EmbeddingGateway`]
//! for query vectors and reads stored candidate vectors through
//! [`VectorLookup`].
//!
//! - [`http`] talks to an external provider over HTTP.
//! - [`mock`] returns deterministic vectors for tests.

mod error;
pub mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

use async_trait::async_trait;

use crate::corpus::CandidateRecord;

pub use error::EmbeddingError;
pub use http::{HttpEmbeddingConfig, HttpEmbeddingGateway};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbeddingGateway;

/// Resolves the stored vector of a candidate.
pub trait VectorLookup: Send + Sync {
    /// Returns `None` for candidates that were never embedded.
    fn stored_vector_of<'a>(&self, candidate: &'a CandidateRecord) -> Option<&'a [f64]> {
        candidate.stored_vector()
    }
}

/// Reads vectors straight off [`CandidateRecord::embedding`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordVectors;

impl VectorLookup for RecordVectors {}

#[async_trait]
/// Text-to-vector provider plus stored-vector lookup.
pub trait EmbeddingGateway: VectorLookup {
    /// Embeds `text`.
    ///
    /// Fails with [`EmbeddingError::Unavailable`] (or
    /// [`EmbeddingError::Timeout`]) when the provider yields no vector.
    /// Implementations must not retry internally.
    async fn embed_text(&self, text: &str) -> Result<Vec<f64>, EmbeddingError>;
}
