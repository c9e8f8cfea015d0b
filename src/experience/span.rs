use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static DECLARED_EXPERIENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)(?:\s*-\s*(\d+))?\s*(?:years?|yrs?)").expect("valid regex")
});

/// Years of experience a candidate declares, as an inclusive span.
///
/// A single figure ("4 years") is the degenerate span `4..=4`. The bounds are
/// kept as written; a reversed span such as "6-4 years" is not reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceSpan {
    pub min: u32,
    pub max: u32,
}

impl ExperienceSpan {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn exact(years: u32) -> Self {
        Self {
            min: years,
            max: years,
        }
    }

    /// `min <= years <= max`.
    pub fn contains(&self, years: u32) -> bool {
        self.min <= years && years <= self.max
    }

    /// Inclusive overlap with `[lo, hi]`.
    pub fn overlaps(&self, lo: u32, hi: u32) -> bool {
        self.min <= hi && self.max >= lo
    }

    /// Parses the first `<digits>[-<digits>] (year|yr)s?` in `text`.
    ///
    /// Returns `None` when no such figure exists; callers must not guess.
    pub fn parse_declared(text: &str) -> Option<Self> {
        let caps = DECLARED_EXPERIENCE_REGEX.captures(text)?;
        let min: u32 = caps.get(1)?.as_str().parse().ok()?;
        let max = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => min,
        };
        Some(Self { min, max })
    }
}

impl std::fmt::Display for ExperienceSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min == self.max {
            write!(f, "{} years", self.min)
        } else {
            write!(f, "{}-{} years", self.min, self.max)
        }
    }
}
