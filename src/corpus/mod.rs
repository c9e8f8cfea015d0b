//! Candidate corpus access.
//!
//! A search ranks a point-in-time [`CorpusSnapshot`]. Sources hand out the
//! snapshot behind an `Arc`, so concurrent searches share it without copying
//! and a refresh never disturbs a search already in flight.

mod error;
pub mod file;
pub mod memory;
pub mod model;


use std::sync::Arc;

use async_trait::async_trait;

pub use error::{CorpusError, CorpusResult};
pub use file::JsonFileCorpus;
pub use memory::InMemoryCorpus;
pub use model::CandidateRecord;

/// Immutable view of every candidate at one point in time.
pub type CorpusSnapshot = Arc<[Arc<CandidateRecord>]>;

/// Builds a snapshot from owned records.
pub fn snapshot_from(records: Vec<CandidateRecord>) -> CorpusSnapshot {
    records.into_iter().map(Arc::new).collect()
}

#[async_trait]
/// Source of candidate snapshots.
pub trait CorpusSource: Send + Sync {
    /// Returns the current snapshot.
    async fn snapshot(&self) -> CorpusResult<CorpusSnapshot>;
}
