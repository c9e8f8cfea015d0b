use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ACCURACY_MULTIPLIER, DEFAULT_EXPERIENCE_FLOOR, DEFAULT_SEMANTIC_FLOOR,
};

use super::error::RankingError;

/// Threshold policy tunables.
///
/// `final = max(floor, max_score * accuracy_multiplier)` where `floor` is
/// `experience_floor` for queries with an experience constraint and
/// `semantic_floor` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    pub accuracy_multiplier: f64,
    pub semantic_floor: f64,
    pub experience_floor: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            accuracy_multiplier: DEFAULT_ACCURACY_MULTIPLIER,
            semantic_floor: DEFAULT_SEMANTIC_FLOOR,
            experience_floor: DEFAULT_EXPERIENCE_FLOOR,
        }
    }
}

impl RankingConfig {
    pub fn with_accuracy_multiplier(mut self, multiplier: f64) -> Self {
        self.accuracy_multiplier = multiplier;
        self
    }

    pub fn with_semantic_floor(mut self, floor: f64) -> Self {
        self.semantic_floor = floor;
        self
    }

    pub fn with_experience_floor(mut self, floor: f64) -> Self {
        self.experience_floor = floor;
        self
    }

    /// Floor applied for this kind of query.
    pub fn floor(&self, has_experience_constraint: bool) -> f64 {
        if has_experience_constraint {
            self.experience_floor
        } else {
            self.semantic_floor
        }
    }

    /// Multiplier must lie in `(0, 1]`; floors must lie in `[-1, 1]`.
    pub fn validate(&self) -> Result<(), RankingError> {
        let m = self.accuracy_multiplier;
        if !(m > 0.0 && m <= 1.0) {
            return Err(RankingError::InvalidConfig {
                reason: format!("accuracy_multiplier must be in (0, 1], got {}", m),
            });
        }

        for (name, floor) in [
            ("semantic_floor", self.semantic_floor),
            ("experience_floor", self.experience_floor),
        ] {
            if !(-1.0..=1.0).contains(&floor) {
                return Err(RankingError::InvalidConfig {
                    reason: format!("{} must be in [-1, 1], got {}", name, floor),
                });
            }
        }

        Ok(())
    }
}
