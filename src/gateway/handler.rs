use axum::{
    Form, Json,
    extract::{FromRequest, Query, Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

use crate::constants::{
    VPROFILE_STATUS_EXTRACTED, VPROFILE_STATUS_FALLBACK, VPROFILE_STATUS_HEADER,
    VPROFILE_STATUS_MATCHED, VPROFILE_STATUS_NO_MATCH,
};
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{VoiceSearchHit, VoiceSearchRequest};
use crate::gateway::state::HandlerState;

const JSON_MIME: &str = "application/json";
const FORM_MIME: &str = "application/x-www-form-urlencoded";

/// `POST /api/search/voice`.
///
/// `userId` and `transcription` are read from a JSON body, a form body, or
/// the query string, in that order of precedence by content type.
#[instrument(skip(state, request), fields(user_id = tracing::field::Empty))]
pub async fn voice_search_handler(
    State(state): State<HandlerState>,
    request: Request,
) -> Result<Response, GatewayError> {
    let request = read_voice_request(request).await?;
    tracing::Span::current().record("user_id", request.user_id);

    let transcription = request.transcription.trim();
    if transcription.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "transcription must not be blank".to_string(),
        ));
    }

    debug!(chars = transcription.len(), "Voice search received");

    let hits = state.service.search(request.user_id, transcription).await?;
    let body: Vec<VoiceSearchHit> = hits.into_iter().map(VoiceSearchHit::from).collect();

    let status = if body.is_empty() {
        VPROFILE_STATUS_NO_MATCH
    } else {
        VPROFILE_STATUS_MATCHED
    };
    let mut headers = HeaderMap::new();
    headers.insert(VPROFILE_STATUS_HEADER, HeaderValue::from_static(status));

    Ok((StatusCode::OK, headers, Json(body)).into_response())
}

async fn read_voice_request(request: Request) -> Result<VoiceSearchRequest, GatewayError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with(JSON_MIME) {
        let Json(value) = Json::<serde_json::Value>::from_request(request, &())
            .await
            .map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
        return serde_json::from_value(value)
            .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)));
    }

    if content_type.starts_with(FORM_MIME) {
        let Form(form) = Form::<VoiceSearchRequest>::from_request(request, &())
            .await
            .map_err(|e| {
                GatewayError::InvalidRequest(format!("Invalid request schema: {}", e.body_text()))
            })?;
        return Ok(form);
    }

    let Query(params) = Query::<VoiceSearchRequest>::try_from_uri(request.uri()).map_err(|e| {
        GatewayError::InvalidRequest(format!("Invalid request schema: {}", e.body_text()))
    })?;
    Ok(params)
}

/// `POST /api/search/jd`.
///
/// Takes a plain-text job description as the body and answers
/// `{"skills", "experience"}`. Extraction failures still answer 200 with the
/// fallback summary.
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn jd_extraction_handler(
    State(state): State<HandlerState>,
    body: String,
) -> Result<Response, GatewayError> {
    let text = body.trim();
    if text.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "job description must not be blank".to_string(),
        ));
    }

    let summary = state.jd.extract(text).await;

    let status = if summary.is_fallback() {
        VPROFILE_STATUS_FALLBACK
    } else {
        VPROFILE_STATUS_EXTRACTED
    };
    let mut headers = HeaderMap::new();
    headers.insert(VPROFILE_STATUS_HEADER, HeaderValue::from_static(status));

    Ok((StatusCode::OK, headers, Json(summary)).into_response())
}
