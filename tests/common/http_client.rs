//! HTTP client helpers for tests.

use std::time::Duration;

use serde::Deserialize;
use vprofile::gateway::{VoiceSearchHit, VoiceSearchRequest};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug)]
pub struct SearchReply {
    pub status: u16,
    pub vprofile_status: Option<String>,
    pub body: serde_json::Value,
}

impl SearchReply {
    pub fn hits(&self) -> Vec<VoiceSearchHit> {
        serde_json::from_value(self.body.clone()).expect("body should be a hit array")
    }
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    pub async fn health(&self) -> reqwest::Result<HealthResponse> {
        self.client
            .get(self.url("/healthz"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn voice_search(
        &self,
        user_id: u64,
        transcription: &str,
    ) -> reqwest::Result<SearchReply> {
        let request = VoiceSearchRequest {
            user_id,
            transcription: transcription.to_string(),
        };
        self.post_raw(serde_json::to_value(request).expect("serialize request"))
            .await
    }

    pub async fn post_raw(&self, body: serde_json::Value) -> reqwest::Result<SearchReply> {
        let response = self
            .client
            .post(self.url("/api/search/voice"))
            .json(&body)
            .send()
            .await?;
        Self::into_reply(response).await
    }

    /// Sends the parameters in the query string, with no body.
    pub async fn voice_search_params(
        &self,
        user_id: u64,
        transcription: &str,
    ) -> reqwest::Result<SearchReply> {
        let response = self
            .client
            .post(self.url("/api/search/voice"))
            .query(&[("userId", user_id.to_string()), ("transcription", transcription.to_string())])
            .send()
            .await?;
        Self::into_reply(response).await
    }

    /// Posts a plain-text job description.
    pub async fn extract_jd(&self, text: &str) -> reqwest::Result<SearchReply> {
        let response = self
            .client
            .post(self.url("/api/search/jd"))
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(text.to_string())
            .send()
            .await?;
        Self::into_reply(response).await
    }

    async fn into_reply(response: reqwest::Response) -> reqwest::Result<SearchReply> {
        let status = response.status().as_u16();
        let vprofile_status = response
            .headers()
            .get(vprofile::constants::VPROFILE_STATUS_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.json().await?;

        Ok(SearchReply {
            status,
            vprofile_status,
            body,
        })
    }
}
