//! Search orchestration.
//!
//! [`SearchService`] wires the pieces together for one request:
//!
//! 1. [`interpret`](crate::query::interpret) the query text
//! 2. embed each concept and average the vectors
//! 3. record the query in the [`QueryLog`]
//! 4. rank the corpus snapshot with [`RankingEngine`](crate::ranking::RankingEngine)
//! 5. apply the [`ExperienceFilter`](crate::experience::ExperienceFilter) when
//!    the query carries a constraint
//!
//! The caller gets either a (possibly empty) ranked list or a [`SearchError`].

pub mod error;
pub mod log;
pub mod service;
pub mod types;


pub use error::{QueryLogError, SearchError};
pub use log::{JsonLinesQueryLog, MemoryQueryLog, QueryLog, QueryLogEntry, TracingQueryLog};
pub use service::SearchService;
pub use types::{SearchHit, SearchOutcome};
