//! Test server harness.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use vprofile::corpus::CorpusSource;
use vprofile::gateway::{HandlerState, create_router_with_state};
use vprofile::{EmbeddingGateway, InMemoryCorpus, JdExtractor, MemoryQueryLog, SearchService};

use super::fixtures;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

pub struct TestServerConfig {
    pub embedder: Arc<dyn EmbeddingGateway>,
    pub corpus: Arc<dyn CorpusSource>,
    pub query_log: Arc<MemoryQueryLog>,
    pub jd: JdExtractor,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            embedder: Arc::new(fixtures::embedder()),
            corpus: Arc::new(InMemoryCorpus::new(fixtures::roster())),
            query_log: Arc::new(MemoryQueryLog::new()),
            jd: JdExtractor::disabled(),
        }
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub query_log: Arc<MemoryQueryLog>,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
}

/// Spawns a server on an ephemeral port with mocked providers.
///
/// The embedder and corpus default to [`fixtures::embedder`] and
/// [`fixtures::roster`]; queries are captured in an in-memory log.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let local_addr = listener.local_addr()?;

    let service = SearchService::new(config.embedder, config.corpus)
        .with_query_log(config.query_log.clone());
    let state = HandlerState::new(Arc::new(service)).with_jd_extractor(config.jd);
    let app = create_router_with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        query_log: config.query_log,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
