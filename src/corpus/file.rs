//! JSON-file backed corpus.
//!
//! The file holds a JSON array of [`CandidateRecord`]s. It is read once on
//! [`JsonFileCorpus::open`] and again on every [`JsonFileCorpus::refresh`];
//! searches in between serve the cached snapshot.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::time;
use tracing::{debug, info, warn};

use super::{CandidateRecord, CorpusError, CorpusResult, CorpusSnapshot, CorpusSource, snapshot_from};

pub struct JsonFileCorpus {
    path: PathBuf,
    snapshot: RwLock<CorpusSnapshot>,
}

impl JsonFileCorpus {
    /// Loads the file at `path`.
    pub async fn open(path: impl Into<PathBuf>) -> CorpusResult<Self> {
        let path = path.into();
        let records = load_records(&path).await?;

        info!(
            path = %path.display(),
            candidates = records.len(),
            "Corpus loaded"
        );

        Ok(Self {
            path,
            snapshot: RwLock::new(snapshot_from(records)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.snapshot.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-reads the file and swaps the snapshot.
    ///
    /// On failure the previous snapshot stays in place.
    pub async fn refresh(&self) -> CorpusResult<usize> {
        let records = load_records(&self.path).await?;
        let count = records.len();
        *self.snapshot.write() = snapshot_from(records);

        debug!(path = %self.path.display(), candidates = count, "Corpus refreshed");
        Ok(count)
    }

    /// Refreshes on a fixed interval until the returned task is aborted.
    pub fn spawn_refresh(self: Arc<Self>, every: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = time::interval(every);
            // First tick fires immediately; the snapshot is already fresh.
            interval.tick().await;
            loop {
                interval.tick().await;
                if let Err(e) = self.refresh().await {
                    warn!(error = %e, "Corpus refresh failed, keeping previous snapshot");
                }
            }
        })
    }
}

impl std::fmt::Debug for JsonFileCorpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileCorpus")
            .field("path", &self.path)
            .field("candidates", &self.len())
            .finish()
    }
}

#[async_trait]
impl CorpusSource for JsonFileCorpus {
    async fn snapshot(&self) -> CorpusResult<CorpusSnapshot> {
        Ok(self.snapshot.read().clone())
    }
}

async fn load_records(path: &Path) -> CorpusResult<Vec<CandidateRecord>> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
