use serde::{Deserialize, Serialize};

use crate::query::InterpretedQuery;
use crate::ranking::{RankingStats, ScoredCandidate};

/// One ranked result, joined with the display fields of its record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub candidate_id: u64,
    pub owner_id: u64,
    pub video_url: Option<String>,
    pub owner_display_name: Option<String>,
    pub thumbnail_url: Option<String>,
    pub job_id: Option<u64>,
    pub confidence_percent: u8,
    pub score: f64,
}

impl From<&ScoredCandidate> for SearchHit {
    fn from(scored: &ScoredCandidate) -> Self {
        let record = &scored.candidate;
        Self {
            candidate_id: record.id,
            owner_id: record.owner_id,
            video_url: record.video_url.clone(),
            owner_display_name: record.owner_display_name.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
            job_id: record.job_id,
            confidence_percent: scored.confidence,
            score: scored.score,
        }
    }
}

/// Hits plus everything needed to explain them.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub hits: Vec<SearchHit>,
    pub interpreted: InterpretedQuery,
    pub ranking: RankingStats,
    /// Accepted by ranking but removed by the experience filter.
    pub filtered_out: usize,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
