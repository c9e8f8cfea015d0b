use tracing::{debug, info};

use crate::corpus::CandidateRecord;
use crate::ranking::ScoredCandidate;

use super::constraint::ExperienceConstraint;
use super::span::ExperienceSpan;

/// Why a candidate was kept or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceVerdict {
    Admitted(ExperienceSpan),
    /// Neither a structured field nor a transcript.
    NoSource,
    /// Source text carries no year figure.
    Unparsable,
    OutsideConstraint(ExperienceSpan),
}

impl ExperienceVerdict {
    pub fn is_admitted(&self) -> bool {
        matches!(self, ExperienceVerdict::Admitted(_))
    }
}

/// Post-ranking membership filter on declared experience.
///
/// Only decides membership: scores, confidences and order of the survivors
/// are left exactly as ranked.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExperienceFilter;

impl ExperienceFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn judge(
        &self,
        candidate: &CandidateRecord,
        constraint: ExperienceConstraint,
    ) -> ExperienceVerdict {
        let Some(source) = candidate.experience_source() else {
            return ExperienceVerdict::NoSource;
        };
        let Some(span) = ExperienceSpan::parse_declared(source) else {
            return ExperienceVerdict::Unparsable;
        };

        if constraint.admits(span) {
            ExperienceVerdict::Admitted(span)
        } else {
            ExperienceVerdict::OutsideConstraint(span)
        }
    }

    /// Keeps candidates whose declared experience satisfies `constraint`.
    ///
    /// [`ExperienceConstraint::None`] returns `ranked` unchanged.
    pub fn apply(
        &self,
        ranked: Vec<ScoredCandidate>,
        constraint: ExperienceConstraint,
    ) -> Vec<ScoredCandidate> {
        if !constraint.is_present() {
            return ranked;
        }

        let before = ranked.len();
        let kept: Vec<ScoredCandidate> = ranked
            .into_iter()
            .filter(|scored| {
                let verdict = self.judge(&scored.candidate, constraint);
                if !verdict.is_admitted() {
                    debug!(
                        candidate_id = scored.candidate.id,
                        ?verdict,
                        required = %constraint,
                        "Dropping candidate on experience"
                    );
                }
                verdict.is_admitted()
            })
            .collect();

        info!(
            constraint = constraint.kind(),
            before,
            after = kept.len(),
            "Experience filter applied"
        );
        kept
    }
}
