//! Cross-cutting, shared constants.
//!
//! # Ranking Tunables
//!
//! [`DEFAULT_ACCURACY_MULTIPLIER`], [`DEFAULT_SEMANTIC_FLOOR`] and
//! [`DEFAULT_EXPERIENCE_FLOOR`] were settled empirically and are open tuning
//! parameters. They are defaults only: override them through
//! [`RankingConfig`](crate::ranking::RankingConfig) or the `VPROFILE_*`
//! environment variables read by [`Config`](crate::config::Config).

/// Fraction of the best score a candidate must reach to be accepted.
///
/// Higher values tighten precision, lower values favor recall.
pub const DEFAULT_ACCURACY_MULTIPLIER: f64 = 0.75;

/// Acceptance floor for purely semantic queries.
pub const DEFAULT_SEMANTIC_FLOOR: f64 = 0.60;

/// Acceptance floor for queries that carry an experience constraint.
pub const DEFAULT_EXPERIENCE_FLOOR: f64 = 0.70;

/// Instruction prefix the embedding provider expects on query-side inputs.
pub const QUERY_INSTRUCTION_PREFIX: &str = "query: ";

/// Suffix appended to each concept when a query is split into two concepts.
pub const CONCEPT_ENRICHMENT_SUFFIX: &str = " expertise and skills";

/// Minimum trimmed length for each side of an " and " split.
pub const MIN_CONCEPT_LEN: usize = 3;

/// Upper bound on a single embedding-provider call.
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 10_000;

/// Embedding provider used when `VPROFILE_EMBEDDING_URL` is not set.
pub const DEFAULT_EMBEDDING_URL: &str = "http://127.0.0.1:8000";

/// OpenAI-compatible endpoint used for job-description extraction.
pub const DEFAULT_JD_API_URL: &str = "https://api.groq.com/openai/v1";

pub const DEFAULT_JD_MODEL: &str = "llama-3.3-70b-versatile";

/// Upper bound on a single job-description extraction call.
pub const DEFAULT_JD_TIMEOUT_MS: u64 = 30_000;

/// Placeholder for a field the job description does not state.
pub const JD_NOT_SPECIFIED: &str = "Not specified";

/// Skills placeholder returned when extraction could not run.
pub const JD_EXTRACTION_FAILED: &str = "Extraction failed";

/// Confidence assigned to the best match of a search.
pub const MAX_CONFIDENCE_PERCENT: u8 = 100;

/// Response header carrying a machine-readable outcome for each HTTP call.
pub const VPROFILE_STATUS_HEADER: &str = "X-Vprofile-Status";
pub const VPROFILE_STATUS_HEALTHY: &str = "healthy";
/// Search ran and produced at least one hit.
pub const VPROFILE_STATUS_MATCHED: &str = "matched";
/// Search ran and nothing cleared the threshold.
pub const VPROFILE_STATUS_NO_MATCH: &str = "no_match";
pub const VPROFILE_STATUS_EXTRACTED: &str = "extracted";
/// Extraction failed and the placeholder summary was returned.
pub const VPROFILE_STATUS_FALLBACK: &str = "fallback";
