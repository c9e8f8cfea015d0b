use serde::{Deserialize, Serialize};

use crate::search::SearchHit;

/// Body of `POST /api/search/voice`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSearchRequest {
    /// The recruiter issuing the search.
    pub user_id: u64,
    /// Speech-to-text output of the recruiter's spoken query.
    pub transcription: String,
}

/// One entry of the response array.
///
/// `id` is the candidate video; `user_id` is the candidate who owns it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSearchHit {
    pub id: u64,
    pub video_url: Option<String>,
    pub user_id: u64,
    #[serde(rename = "jobid")]
    pub job_id: Option<u64>,
    pub thumbnail: Option<String>,
    pub first_name: Option<String>,
    pub confidence: u8,
}

impl From<SearchHit> for VoiceSearchHit {
    fn from(hit: SearchHit) -> Self {
        Self {
            id: hit.candidate_id,
            video_url: hit.video_url,
            user_id: hit.owner_id,
            job_id: hit.job_id,
            thumbnail: hit.thumbnail_url,
            first_name: hit.owner_display_name,
            confidence: hit.confidence_percent,
        }
    }
}
