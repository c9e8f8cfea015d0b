//! Similarity ranking with a self-relative acceptance threshold.
//!
//! The bar adapts to how well the best match performs for each query instead
//! of using one global cutoff:
//!
//! ```text
//! threshold  = max(floor, max_score * accuracy_multiplier)
//! floor      = experience_floor   if the query carries an experience constraint
//!              semantic_floor     otherwise
//! confidence = round(score / max_score * 100)
//! ```
//!
//! Broad queries that match everything moderately still return their best
//! matches, while a clearly dominant match suppresses weak ones.

pub mod config;
pub mod engine;
pub mod error;
pub mod types;


pub use config::RankingConfig;
pub use engine::RankingEngine;
pub use error::{RankingError, RankingResult};
pub use types::{CancelFlag, RawScore, Ranking, RankingStats, ScoreSheet, ScoredCandidate};
