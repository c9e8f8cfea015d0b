//! Audit trail of executed queries.
//!
//! Each search records who asked what, and the vector the query resolved to.
//! A failing log never fails the search.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tracing::info;
use uuid::Uuid;

use super::error::QueryLogError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub id: Uuid,
    pub requester_id: u64,
    pub query: String,
    pub query_vector: Vec<f64>,
    pub created_at: DateTime<Utc>,
}

impl QueryLogEntry {
    pub fn new(requester_id: u64, query: impl Into<String>, query_vector: Vec<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            requester_id,
            query: query.into(),
            query_vector,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait QueryLog: Send + Sync {
    async fn record(&self, entry: QueryLogEntry) -> Result<(), QueryLogError>;
}

/// Emits one `info` event per query; the vector itself is not logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingQueryLog;

#[async_trait]
impl QueryLog for TracingQueryLog {
    async fn record(&self, entry: QueryLogEntry) -> Result<(), QueryLogError> {
        info!(
            query_id = %entry.id,
            requester_id = entry.requester_id,
            query = %entry.query,
            dim = entry.query_vector.len(),
            "Query recorded"
        );
        Ok(())
    }
}

/// Keeps entries in memory.
#[derive(Debug, Default)]
pub struct MemoryQueryLog {
    entries: Mutex<Vec<QueryLogEntry>>,
}

impl MemoryQueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<QueryLogEntry> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl QueryLog for MemoryQueryLog {
    async fn record(&self, entry: QueryLogEntry) -> Result<(), QueryLogError> {
        self.entries.lock().push(entry);
        Ok(())
    }
}

/// Appends one JSON object per line to a file.
#[derive(Debug)]
pub struct JsonLinesQueryLog {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl JsonLinesQueryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QueryLog for JsonLinesQueryLog {
    async fn record(&self, entry: QueryLogEntry) -> Result<(), QueryLogError> {
        let mut line = serde_json::to_vec(&entry)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;
        Ok(())
    }
}
