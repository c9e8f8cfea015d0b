use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::constants::MAX_CONFIDENCE_PERCENT;
use crate::corpus::CandidateRecord;
use crate::embedding::{RecordVectors, VectorLookup};
use crate::vector::cosine_similarity;

use super::config::RankingConfig;
use super::error::{RankingError, RankingResult};
use super::types::{CancelFlag, RawScore, Ranking, RankingStats, ScoreSheet, ScoredCandidate};

/// Number of best rejected scores logged when nothing clears the threshold.
const REJECTED_SCORES_TO_LOG: usize = 5;

/// Scores candidates against a query vector and applies the self-relative
/// acceptance policy.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    config: RankingConfig,
}

impl RankingEngine {
    pub fn new(config: RankingConfig) -> RankingResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// `max(floor, max_score * accuracy_multiplier)`.
    pub fn threshold_for(&self, max_score: f64, has_experience_constraint: bool) -> f64 {
        let dynamic = max_score * self.config.accuracy_multiplier;
        self.config.floor(has_experience_constraint).max(dynamic)
    }

    /// `round(score / max_score * 100)` clamped to `[0, 100]`.
    ///
    /// A non-positive `max_score` is treated as `1.0`.
    pub fn confidence_for(score: f64, max_score: f64) -> u8 {
        let denominator = if max_score > 0.0 { max_score } else { 1.0 };
        let percent = (score / denominator * 100.0).round();
        percent.clamp(0.0, f64::from(MAX_CONFIDENCE_PERCENT)) as u8
    }

    /// Ranks using the vectors stored on the records themselves.
    pub fn rank(
        &self,
        query: &[f64],
        candidates: &[Arc<CandidateRecord>],
        has_experience_constraint: bool,
    ) -> RankingResult<Ranking> {
        self.rank_with(
            &RecordVectors,
            query,
            candidates,
            has_experience_constraint,
            &CancelFlag::new(),
        )
    }

    pub fn rank_with<L>(
        &self,
        lookup: &L,
        query: &[f64],
        candidates: &[Arc<CandidateRecord>],
        has_experience_constraint: bool,
        cancel: &CancelFlag,
    ) -> RankingResult<Ranking>
    where
        L: VectorLookup + ?Sized,
    {
        let sheet = self.score_all(lookup, query, candidates, cancel)?;
        Ok(self.select(sheet, has_experience_constraint))
    }

    /// Scores every candidate that has a stored vector, in corpus order.
    ///
    /// Candidates without a vector are counted in [`ScoreSheet::skipped`],
    /// never scored as zero. A vector whose length differs from the query's
    /// aborts the pass.
    pub fn score_all<L>(
        &self,
        lookup: &L,
        query: &[f64],
        candidates: &[Arc<CandidateRecord>],
        cancel: &CancelFlag,
    ) -> RankingResult<ScoreSheet>
    where
        L: VectorLookup + ?Sized,
    {
        let mut entries = Vec::with_capacity(candidates.len());
        let mut skipped = 0usize;

        for candidate in candidates {
            if cancel.is_cancelled() {
                debug!(scored = entries.len(), "Ranking cancelled mid-scan");
                return Err(RankingError::Cancelled);
            }

            let Some(vector) = lookup.stored_vector_of(candidate) else {
                skipped += 1;
                debug!(candidate_id = candidate.id, "Skipping candidate without stored embedding");
                continue;
            };

            let score = cosine_similarity(query, vector).map_err(|source| RankingError::Vector {
                candidate_id: candidate.id,
                source,
            })?;

            entries.push(RawScore {
                candidate: Arc::clone(candidate),
                score,
            });
        }

        if skipped > 0 {
            warn!(
                skipped,
                total = candidates.len(),
                "Candidates excluded from ranking: no stored embedding"
            );
        }

        Ok(ScoreSheet { entries, skipped })
    }

    /// Applies the threshold policy to a score sheet.
    ///
    /// Never relaxes the threshold: when nothing qualifies the ranking is
    /// empty.
    pub fn select(&self, sheet: ScoreSheet, has_experience_constraint: bool) -> Ranking {
        let floor = self.config.floor(has_experience_constraint);
        let mut stats = RankingStats {
            total: sheet.entries.len() + sheet.skipped,
            scored: sheet.entries.len(),
            skipped: sheet.skipped,
            floor,
            ..Default::default()
        };

        let Some(max_score) = sheet.max_score() else {
            info!(
                skipped = sheet.skipped,
                "No candidates with embeddings to score"
            );
            return Ranking {
                candidates: Vec::new(),
                stats,
            };
        };

        let dynamic = max_score * self.config.accuracy_multiplier;
        let threshold = floor.max(dynamic);
        stats.max_score = Some(max_score);
        stats.dynamic_threshold = Some(dynamic);
        stats.threshold = Some(threshold);

        info!(
            max_score,
            multiplier = self.config.accuracy_multiplier,
            dynamic_threshold = dynamic,
            floor,
            threshold,
            has_experience_constraint,
            "Computed acceptance threshold"
        );

        let mut accepted: Vec<RawScore> = Vec::with_capacity(sheet.entries.len());
        let mut rejected: Vec<f64> = Vec::new();
        for entry in sheet.entries {
            if entry.score >= threshold {
                accepted.push(entry);
            } else {
                rejected.push(entry.score);
            }
        }

        if accepted.is_empty() {
            rejected.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
            rejected.truncate(REJECTED_SCORES_TO_LOG);
            warn!(
                threshold,
                top_scores = ?rejected,
                "No candidates cleared the threshold"
            );
            return Ranking {
                candidates: Vec::new(),
                stats,
            };
        }

        // sort_by is stable: equal scores keep corpus order.
        accepted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let candidates: Vec<ScoredCandidate> = accepted
            .into_iter()
            .map(|entry| {
                let confidence = Self::confidence_for(entry.score, max_score);
                debug!(
                    candidate_id = entry.candidate.id,
                    score = entry.score,
                    confidence,
                    "Candidate accepted"
                );
                ScoredCandidate {
                    candidate: entry.candidate,
                    score: entry.score,
                    confidence,
                }
            })
            .collect();

        stats.accepted = candidates.len();
        info!(
            accepted = stats.accepted,
            scored = stats.scored,
            "Ranking complete"
        );

        Ranking { candidates, stats }
    }
}
