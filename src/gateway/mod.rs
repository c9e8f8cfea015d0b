//! HTTP gateway (Axum) for voice search and job-description extraction.
//!
//! Used by the `vprofile-search` binary and the integration tests.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::{ErrorResponse, GatewayError};
pub use handler::{jd_extraction_handler, voice_search_handler};
pub use payload::{VoiceSearchHit, VoiceSearchRequest};
pub use state::HandlerState;

use crate::constants::{VPROFILE_STATUS_HEADER, VPROFILE_STATUS_HEALTHY};

pub const VOICE_SEARCH_PATH: &str = "/api/search/voice";
pub const JD_EXTRACTION_PATH: &str = "/api/search/jd";
pub const HEALTH_PATH: &str = "/healthz";

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health_handler))
        .route(VOICE_SEARCH_PATH, post(voice_search_handler))
        .route(JD_EXTRACTION_PATH, post(jd_extraction_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        VPROFILE_STATUS_HEADER,
        HeaderValue::from_static(VPROFILE_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}
