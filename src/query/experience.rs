use std::sync::LazyLock;

use regex::Regex;

use crate::experience::ExperienceConstraint;

static RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:-|to)\s*(\d+)\s*years?").expect("valid regex")
});

static MINIMUM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:above|more than|over|atleast|at least|minimum)\s*(\d+)\s*years?|(\d+)\s*(?:\+|plus)\s*years?",
    )
    .expect("valid regex")
});

static EXACT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*years?(?:\s+(?:of\s+)?experience)?\b").expect("valid regex")
});

/// Extracts the experience requirement of a raw (not normalized) query.
///
/// Rules are tried in order and the first match wins: range, then minimum,
/// then exact. Matches are never combined.
pub fn extract_constraint(query: &str) -> ExperienceConstraint {
    if let Some(caps) = RANGE_REGEX.captures(query)
        && let (Some(min), Some(max)) = (number(caps.get(1)), number(caps.get(2)))
    {
        return ExperienceConstraint::Range { min, max };
    }

    if let Some(caps) = MINIMUM_REGEX.captures(query)
        && let Some(min) = number(caps.get(1).or_else(|| caps.get(2)))
    {
        return ExperienceConstraint::Minimum(min);
    }

    if let Some(caps) = EXACT_REGEX.captures(query)
        && let Some(years) = number(caps.get(1))
    {
        return ExperienceConstraint::Exact(years);
    }

    ExperienceConstraint::None
}

fn number(m: Option<regex::Match<'_>>) -> Option<u32> {
    m?.as_str().parse().ok()
}
