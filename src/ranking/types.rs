use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::corpus::CandidateRecord;

/// Candidate paired with its similarity to the query.
///
/// A fresh record per search; the shared candidate is never annotated.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: Arc<CandidateRecord>,
    /// Cosine similarity in `[-1, 1]`.
    pub score: f64,
    /// Score relative to the best match of this search, in `[0, 100]`.
    pub confidence: u8,
}

impl ScoredCandidate {
    pub fn id(&self) -> u64 {
        self.candidate.id
    }
}

/// Raw similarity before thresholding.
#[derive(Debug, Clone)]
pub struct RawScore {
    pub candidate: Arc<CandidateRecord>,
    pub score: f64,
}

/// Every candidate that could be scored, in corpus order.
#[derive(Debug, Clone, Default)]
pub struct ScoreSheet {
    pub entries: Vec<RawScore>,
    /// Candidates without a stored vector.
    pub skipped: usize,
}

impl ScoreSheet {
    pub fn from_scores(scores: impl IntoIterator<Item = (Arc<CandidateRecord>, f64)>) -> Self {
        Self {
            entries: scores
                .into_iter()
                .map(|(candidate, score)| RawScore { candidate, score })
                .collect(),
            skipped: 0,
        }
    }

    pub fn max_score(&self) -> Option<f64> {
        self.entries.iter().map(|e| e.score).reduce(f64::max)
    }
}

/// Counters and thresholds of one ranking pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingStats {
    pub total: usize,
    pub scored: usize,
    pub skipped: usize,
    pub max_score: Option<f64>,
    pub dynamic_threshold: Option<f64>,
    pub floor: f64,
    pub threshold: Option<f64>,
    pub accepted: usize,
}

/// Outcome of [`RankingEngine::rank`](super::RankingEngine::rank).
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    /// Accepted candidates, best first.
    pub candidates: Vec<ScoredCandidate>,
    pub stats: RankingStats,
}

impl Ranking {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn ids(&self) -> Vec<u64> {
        self.candidates.iter().map(ScoredCandidate::id).collect()
    }
}

/// Cooperative cancellation for a ranking pass.
///
/// Clones share the same flag. Scoring checks it before every candidate.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
