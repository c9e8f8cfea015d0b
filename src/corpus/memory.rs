use async_trait::async_trait;
use parking_lot::RwLock;

use super::{CandidateRecord, CorpusResult, CorpusSnapshot, CorpusSource, snapshot_from};

/// Corpus held entirely in memory.
pub struct InMemoryCorpus {
    snapshot: RwLock<CorpusSnapshot>,
}

impl InMemoryCorpus {
    pub fn new(records: Vec<CandidateRecord>) -> Self {
        Self {
            snapshot: RwLock::new(snapshot_from(records)),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Swaps in a new set of records; running searches keep the old snapshot.
    pub fn replace(&self, records: Vec<CandidateRecord>) {
        *self.snapshot.write() = snapshot_from(records);
    }

    pub fn len(&self) -> usize {
        self.snapshot.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryCorpus {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for InMemoryCorpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCorpus")
            .field("candidates", &self.len())
            .finish()
    }
}

#[async_trait]
impl CorpusSource for InMemoryCorpus {
    async fn snapshot(&self) -> CorpusResult<CorpusSnapshot> {
        Ok(self.snapshot.read().clone())
    }
}
