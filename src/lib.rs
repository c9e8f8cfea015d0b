//! vprofile library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Search Pipeline
//! - [`SearchService`], [`SearchHit`], [`SearchError`] - End-to-end recruiter search
//! - [`interpret`], [`InterpretedQuery`] - Concept split and experience extraction
//! - [`RankingEngine`], [`RankingConfig`] - Adaptive-threshold ranking
//! - [`ExperienceFilter`], [`ExperienceConstraint`] - Post-ranking experience filter
//!
//! ## Providers
//! - [`EmbeddingGateway`], [`HttpEmbeddingGateway`] - Text embedding
//! - [`CorpusSource`], [`JsonFileCorpus`], [`InMemoryCorpus`] - Candidate snapshots
//! - [`QueryLog`] - Query audit trail
//! - [`JdExtractor`], [`ChatCompletionClient`] - Job-description requirement extraction
//!
//! ## Utilities
//! - [`cosine_similarity`], [`average_vectors`], [`mean_of`] - Vector math
//! - [`Config`], [`ConfigError`] - Server configuration
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod corpus;
pub mod embedding;
pub mod experience;
pub mod gateway;
pub mod jd;
pub mod query;
pub mod ranking;
pub mod search;
pub mod vector;

pub use config::{Config, ConfigError};
pub use corpus::{
    CandidateRecord, CorpusError, CorpusResult, CorpusSnapshot, CorpusSource, InMemoryCorpus,
    JsonFileCorpus,
};
pub use embedding::{
    EmbeddingError, EmbeddingGateway, HttpEmbeddingConfig, HttpEmbeddingGateway, RecordVectors,
    VectorLookup,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbeddingGateway;
pub use experience::{ExperienceConstraint, ExperienceFilter, ExperienceSpan, ExperienceVerdict};
pub use jd::{
    ChatCompletionClient, ChatCompletionConfig, CompletionProvider, JdError, JdExtractor,
    JdSummary,
};
#[cfg(any(test, feature = "mock"))]
pub use jd::MockCompletionProvider;
pub use query::{ConceptPhrase, InterpretedQuery, interpret};
pub use ranking::{
    CancelFlag, Ranking, RankingConfig, RankingEngine, RankingError, RankingStats,
    ScoredCandidate,
};
pub use search::{
    JsonLinesQueryLog, MemoryQueryLog, QueryLog, QueryLogEntry, SearchError, SearchHit,
    SearchOutcome, SearchService, TracingQueryLog,
};
pub use vector::{VectorError, average_vectors, cosine_similarity, mean_of};
