use serde::{Deserialize, Serialize};

use crate::constants::{CONCEPT_ENRICHMENT_SUFFIX, MIN_CONCEPT_LEN, QUERY_INSTRUCTION_PREFIX};

/// Filler phrases removed from a lowercased query, in removal order.
///
/// Longer phrases come first so a shorter one never strips half of a longer
/// one.
pub const FILLER_PHRASES: &[&str] = &[
    "i am looking for the person who is good at",
    "i am looking for the pearson who is good at",
    "i am looking for someone who is good at",
    "i am looking for",
    "person who is good at",
    "someone who is good at",
    "someone with",
];

/// Trailing words dropped from each side of a split; the enrichment suffix
/// re-adds them uniformly.
const TRAILING_FILLER_WORDS: &[&str] = &["expertise", "skills", "skill", "experience"];

const CONJUNCTION: &str = " and ";

/// One semantic unit of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptPhrase {
    pub text: String,
    /// Set for phrases produced by an " and " split.
    pub enriched: bool,
}

impl ConceptPhrase {
    pub fn whole(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enriched: false,
        }
    }

    pub fn part(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enriched: true,
        }
    }

    /// Text sent to the embedding provider.
    pub fn embedding_input(&self) -> String {
        if self.enriched {
            format!(
                "{}{}{}",
                QUERY_INSTRUCTION_PREFIX, self.text, CONCEPT_ENRICHMENT_SUFFIX
            )
        } else {
            format!("{}{}", QUERY_INSTRUCTION_PREFIX, self.text)
        }
    }
}

/// Lowercases, strips [`FILLER_PHRASES`] and trims.
pub fn normalize_query(query: &str) -> String {
    let mut normalized = query.to_lowercase();
    for filler in FILLER_PHRASES {
        if normalized.contains(filler) {
            normalized = normalized.replace(filler, "");
        }
    }
    collapse_whitespace(&normalized)
}

/// Splits a normalized query into concept phrases.
///
/// With " and " present and both of the first two trimmed sides at least
/// [`MIN_CONCEPT_LEN`] characters long, yields exactly two enriched phrases;
/// sides beyond the second are ignored. Otherwise yields the whole query as
/// one phrase.
///
/// The length check sees each side as written; trailing filler words are
/// dropped only from the phrase text.
pub fn decompose(normalized: &str) -> Vec<ConceptPhrase> {
    if normalized.contains(CONJUNCTION) {
        let mut parts = normalized.split(CONJUNCTION).map(str::trim);

        if let (Some(first), Some(second)) = (parts.next(), parts.next())
            && first.chars().count() >= MIN_CONCEPT_LEN
            && second.chars().count() >= MIN_CONCEPT_LEN
        {
            return vec![
                ConceptPhrase::part(strip_trailing_filler(first)),
                ConceptPhrase::part(strip_trailing_filler(second)),
            ];
        }
    }

    vec![ConceptPhrase::whole(normalized)]
}

/// Drops trailing [`TRAILING_FILLER_WORDS`]; a side made only of filler
/// words is kept as is.
fn strip_trailing_filler(part: &str) -> &str {
    let mut text = part.trim();
    loop {
        let Some((head, last)) = text.rsplit_once(' ') else {
            return text;
        };
        let head = head.trim_end();
        if TRAILING_FILLER_WORDS.contains(&last) && !head.is_empty() {
            text = head;
        } else {
            return text;
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
