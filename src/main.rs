//! vprofile-search HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use vprofile::config::Config;
use vprofile::corpus::{CorpusSource, InMemoryCorpus, JsonFileCorpus};
use vprofile::embedding::HttpEmbeddingGateway;
use vprofile::gateway::{HandlerState, create_router_with_state};
use vprofile::jd::{ChatCompletionClient, JdExtractor};
use vprofile::ranking::RankingEngine;
use vprofile::search::{JsonLinesQueryLog, QueryLog, SearchService, TracingQueryLog};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        embedding_url = %config.embedding_url,
        "vprofile-search starting"
    );

    let corpus: Arc<dyn CorpusSource> = match &config.corpus_path {
        Some(path) => {
            let corpus = Arc::new(JsonFileCorpus::open(path.clone()).await?);
            if let Some(every) = config.corpus_refresh_interval() {
                corpus.clone().spawn_refresh(every);
            }
            corpus
        }
        None => {
            tracing::warn!("No VPROFILE_CORPUS_PATH configured, serving an empty corpus");
            Arc::new(InMemoryCorpus::empty())
        }
    };

    let query_log: Arc<dyn QueryLog> = match &config.query_log_path {
        Some(path) => Arc::new(JsonLinesQueryLog::new(path.clone())),
        None => Arc::new(TracingQueryLog),
    };

    let embedder = Arc::new(HttpEmbeddingGateway::new(config.http_embedding_config())?);
    let engine = RankingEngine::new(config.ranking)?;

    let service = SearchService::new(embedder, corpus)
        .with_query_log(query_log)
        .with_engine(engine);

    let jd = match config.chat_completion_config() {
        Some(jd_config) => {
            tracing::info!(model = %jd_config.model, "Job-description extraction enabled");
            JdExtractor::new(Arc::new(ChatCompletionClient::new(jd_config)?))
        }
        None => {
            tracing::warn!("No VPROFILE_JD_API_KEY configured, job-description extraction disabled");
            JdExtractor::disabled()
        }
    };

    let state = HandlerState::new(Arc::new(service)).with_jd_extractor(jd);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("vprofile-search shutdown complete");
    Ok(())
}

async fn run_health_check() -> i32 {
    let port = std::env::var("VPROFILE_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
