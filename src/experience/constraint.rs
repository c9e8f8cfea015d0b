use serde::{Deserialize, Serialize};

use super::span::ExperienceSpan;

/// Years-of-experience requirement extracted from a query.
///
/// Built by [`extract_constraint`](crate::query::extract_constraint); the
/// first matching pattern decides the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "years", rename_all = "snake_case")]
pub enum ExperienceConstraint {
    /// No requirement found.
    #[default]
    None,
    /// "5 years", "3 years of experience".
    Exact(u32),
    /// "2-5 years", "3 to 6 years".
    Range { min: u32, max: u32 },
    /// "above 3 years", "3+ years", "at least 2 years".
    Minimum(u32),
}

impl ExperienceConstraint {
    /// Returns `true` unless this is [`ExperienceConstraint::None`].
    pub fn is_present(&self) -> bool {
        !matches!(self, ExperienceConstraint::None)
    }

    /// Returns `true` if a declared span satisfies the requirement.
    ///
    /// Bounds are inclusive. `Range` uses interval overlap, not containment.
    /// `None` admits everything.
    pub fn admits(&self, declared: ExperienceSpan) -> bool {
        match *self {
            ExperienceConstraint::None => true,
            ExperienceConstraint::Minimum(min) => declared.min >= min,
            ExperienceConstraint::Exact(n) => {
                declared.min == n || declared.max == n || declared.contains(n)
            }
            ExperienceConstraint::Range { min, max } => declared.overlaps(min, max),
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ExperienceConstraint::None => "none",
            ExperienceConstraint::Exact(_) => "exact",
            ExperienceConstraint::Range { .. } => "range",
            ExperienceConstraint::Minimum(_) => "minimum",
        }
    }
}

impl std::fmt::Display for ExperienceConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceConstraint::None => write!(f, "any experience"),
            ExperienceConstraint::Exact(n) => write!(f, "exactly {} years", n),
            ExperienceConstraint::Range { min, max } => write!(f, "{}-{} years", min, max),
            ExperienceConstraint::Minimum(min) => write!(f, "{}+ years", min),
        }
    }
}
