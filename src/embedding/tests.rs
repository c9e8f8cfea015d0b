use super::*;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
use tokio::net::TcpListener;

async fn spawn_provider(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn gateway_for(addr: SocketAddr) -> HttpEmbeddingGateway {
    HttpEmbeddingGateway::new(
        HttpEmbeddingConfig::new(format!("http://{}", addr)).with_timeout(Duration::from_secs(2)),
    )
    .unwrap()
}

#[tokio::test]
async fn test_http_gateway_returns_embedding() {
    let router = Router::new().route(
        "/embed",
        post(|Json(body): Json<serde_json::Value>| async move {
            assert_eq!(body["type"], "query");
            assert_eq!(body["input"], "query: marketing");
            Json(serde_json::json!({ "embedding": [0.1, 0.2, 0.3] }))
        }),
    );
    let gateway = gateway_for(spawn_provider(router).await);

    let vector = gateway.embed_text("query: marketing").await.unwrap();
    assert_eq!(vector, vec![0.1, 0.2, 0.3]);
}

#[tokio::test]
async fn test_http_gateway_sends_token_header() {
    let router = Router::new().route(
        "/embed",
        post(|headers: HeaderMap| async move {
            let token = headers
                .get("token")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if token == "secret" {
                (StatusCode::OK, Json(serde_json::json!({ "embedding": [1.0] })))
            } else {
                (StatusCode::UNAUTHORIZED, Json(serde_json::json!({})))
            }
        }),
    );
    let addr = spawn_provider(router).await;

    let with_token = HttpEmbeddingGateway::new(
        HttpEmbeddingConfig::new(format!("http://{}", addr)).with_token("secret"),
    )
    .unwrap();
    assert_eq!(with_token.embed_text("x").await.unwrap(), vec![1.0]);

    let without_token = gateway_for(addr);
    let err = without_token.embed_text("x").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::Unavailable { .. }));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_http_gateway_missing_embedding_is_unavailable() {
    let router = Router::new().route(
        "/embed",
        post(|| async { Json(serde_json::json!({ "detail": "model warming up" })) }),
    );
    let gateway = gateway_for(spawn_provider(router).await);

    let err = gateway.embed_text("query: sales").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::Unavailable { .. }));
}

#[tokio::test]
async fn test_http_gateway_empty_embedding_is_unavailable() {
    let router = Router::new().route(
        "/embed",
        post(|| async { Json(serde_json::json!({ "embedding": [] })) }),
    );
    let gateway = gateway_for(spawn_provider(router).await);

    assert!(matches!(
        gateway.embed_text("query: sales").await,
        Err(EmbeddingError::Unavailable { .. })
    ));
}

#[tokio::test]
async fn test_http_gateway_server_error_is_unavailable() {
    let router = Router::new().route(
        "/embed",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let gateway = gateway_for(spawn_provider(router).await);

    let err = gateway.embed_text("query: sales").await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_http_gateway_times_out() {
    let router = Router::new().route(
        "/embed",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(serde_json::json!({ "embedding": [1.0] }))
        }),
    );
    let addr = spawn_provider(router).await;
    let gateway = HttpEmbeddingGateway::new(
        HttpEmbeddingConfig::new(format!("http://{}", addr))
            .with_timeout(Duration::from_millis(100)),
    )
    .unwrap();

    let err = gateway.embed_text("query: sales").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::Timeout { timeout_ms: 100 }));
}

#[tokio::test]
async fn test_http_gateway_connection_refused_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = gateway_for(addr).embed_text("x").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::Unavailable { .. }));
}

#[test]
fn test_http_config_validation() {
    assert!(HttpEmbeddingConfig::default().validate().is_ok());
    assert!(HttpEmbeddingConfig::new("ftp://example").validate().is_err());
    assert!(
        HttpEmbeddingConfig::new("http://localhost:8000")
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err()
    );
}

#[test]
fn test_http_config_embed_url_trims_trailing_slash() {
    let config = HttpEmbeddingConfig::new("http://localhost:8000/");
    assert_eq!(config.embed_url(), "http://localhost:8000/embed");
}

#[test]
fn test_record_vectors_reads_embedding() {
    let with = CandidateRecord::new(1, 1).with_embedding(vec![1.0, 2.0]);
    let without = CandidateRecord::new(2, 1);

    assert_eq!(RecordVectors.stored_vector_of(&with), Some(&[1.0, 2.0][..]));
    assert_eq!(RecordVectors.stored_vector_of(&without), None);
}

#[tokio::test]
async fn test_mock_gateway_is_deterministic_and_normalized() {
    let gateway = MockEmbeddingGateway::new(16);

    let a = gateway.embed_text("query: marketing").await.unwrap();
    let b = gateway.embed_text("query: marketing").await.unwrap();
    let c = gateway.embed_text("query: finance").await.unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 16);
    assert!((crate::vector::l2_norm(&a) - 1.0).abs() < 1e-9);
    assert_eq!(gateway.call_count(), 3);
}

#[tokio::test]
async fn test_mock_gateway_fixed_vectors_and_failure() {
    let gateway = MockEmbeddingGateway::new(2).with_vector("known", vec![1.0, 0.0]);

    assert_eq!(gateway.embed_text("known").await.unwrap(), vec![1.0, 0.0]);

    gateway.set_failing(true);
    assert!(matches!(
        gateway.embed_text("known").await,
        Err(EmbeddingError::Unavailable { .. })
    ));
    assert_eq!(gateway.inputs(), vec!["known".to_string(), "known".to_string()]);
}
