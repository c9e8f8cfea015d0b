use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::corpus::CorpusSource;
use crate::embedding::EmbeddingGateway;
use crate::experience::ExperienceFilter;
use crate::query::{InterpretedQuery, interpret};
use crate::ranking::{CancelFlag, RankingEngine};
use crate::vector::mean_of;

use super::error::SearchError;
use super::log::{QueryLog, QueryLogEntry, TracingQueryLog};
use super::types::{SearchHit, SearchOutcome};

/// Runs a recruiter query end to end.
///
/// Holds no per-search state, so one instance serves concurrent searches.
pub struct SearchService {
    embedder: Arc<dyn EmbeddingGateway>,
    corpus: Arc<dyn CorpusSource>,
    query_log: Arc<dyn QueryLog>,
    engine: RankingEngine,
    filter: ExperienceFilter,
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl SearchService {
    pub fn new(embedder: Arc<dyn EmbeddingGateway>, corpus: Arc<dyn CorpusSource>) -> Self {
        Self {
            embedder,
            corpus,
            query_log: Arc::new(TracingQueryLog),
            engine: RankingEngine::default(),
            filter: ExperienceFilter::new(),
        }
    }

    pub fn with_query_log(mut self, query_log: Arc<dyn QueryLog>) -> Self {
        self.query_log = query_log;
        self
    }

    pub fn with_engine(mut self, engine: RankingEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn engine(&self) -> &RankingEngine {
        &self.engine
    }

    /// Ranked hits for `query`, best first. An empty list is a valid answer.
    pub async fn search(
        &self,
        requester_id: u64,
        query: &str,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let outcome = self
            .search_with_cancel(requester_id, query, &CancelFlag::new())
            .await?;
        Ok(outcome.hits)
    }

    /// Resolves the query to one vector: each concept is embedded, then the
    /// concept vectors are averaged element-wise.
    pub async fn embed_query(&self, interpreted: &InterpretedQuery) -> Result<Vec<f64>, SearchError> {
        let mut vectors = Vec::with_capacity(interpreted.concepts.len());
        for input in interpreted.embedding_inputs() {
            vectors.push(self.embedder.embed_text(&input).await?);
        }

        Ok(mean_of(&vectors)?)
    }

    pub async fn search_with_cancel(
        &self,
        requester_id: u64,
        query: &str,
        cancel: &CancelFlag,
    ) -> Result<SearchOutcome, SearchError> {
        info!(requester_id, query_len = query.len(), "Starting semantic search");

        let interpreted = interpret(query);
        let constraint = interpreted.experience;
        debug!(
            concepts = interpreted.concepts.len(),
            normalized = %interpreted.normalized,
            experience = %constraint,
            "Query interpreted"
        );

        let query_vector = self.embed_query(&interpreted).await.inspect_err(|e| {
            warn!(requester_id, error = %e, "Search aborted: query embedding failed");
        })?;

        let entry = QueryLogEntry::new(requester_id, query, query_vector.clone());
        if let Err(e) = self.query_log.record(entry).await {
            warn!(requester_id, error = %e, "Failed to record query");
        }

        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        let snapshot = self.corpus.snapshot().await?;
        debug!(candidates = snapshot.len(), "Fetched corpus snapshot");

        let ranking = self.engine.rank_with(
            self.embedder.as_ref(),
            &query_vector,
            &snapshot,
            constraint.is_present(),
            cancel,
        )?;

        let accepted = ranking.len();
        let survivors = self.filter.apply(ranking.candidates, constraint);
        let hits: Vec<SearchHit> = survivors.iter().map(SearchHit::from).collect();

        info!(
            requester_id,
            results = hits.len(),
            accepted,
            scored = ranking.stats.scored,
            skipped = ranking.stats.skipped,
            "Search complete"
        );

        Ok(SearchOutcome {
            filtered_out: accepted - hits.len(),
            hits,
            interpreted,
            ranking: ranking.stats,
        })
    }
}
