//! Free-text query interpretation.
//!
//! A recruiter query is turned into:
//!
//! - one or two [`ConceptPhrase`]s to embed (two when the query joins two
//!   topics with " and "), and
//! - an [`ExperienceConstraint`] read from the raw query text.

pub mod concepts;
pub mod experience;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::experience::ExperienceConstraint;

pub use concepts::{ConceptPhrase, FILLER_PHRASES, decompose, normalize_query};
pub use experience::extract_constraint;

/// Result of [`interpret`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub normalized: String,
    pub concepts: Vec<ConceptPhrase>,
    pub experience: ExperienceConstraint,
}

impl InterpretedQuery {
    pub fn has_experience_constraint(&self) -> bool {
        self.experience.is_present()
    }

    /// Provider inputs, one per concept.
    pub fn embedding_inputs(&self) -> Vec<String> {
        self.concepts.iter().map(ConceptPhrase::embedding_input).collect()
    }
}

/// Decomposes `query` into concepts and an experience constraint.
pub fn interpret(query: &str) -> InterpretedQuery {
    let normalized = normalize_query(query);
    let concepts = decompose(&normalized);
    let experience = extract_constraint(query);

    InterpretedQuery {
        normalized,
        concepts,
        experience,
    }
}
