use serde::{Deserialize, Serialize};

/// A video eligible for ranking, as read from the corpus.
///
/// Only `embedding`, `declared_experience` and `transcript` feed the ranking
/// and filtering decisions. The display fields are carried through untouched
/// so a search hit can be rendered without a second lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Video identifier.
    pub id: u64,
    /// Owner (candidate user) identifier.
    #[serde(default)]
    pub owner_id: u64,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub owner_display_name: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Job posting the video was recorded for, if any.
    #[serde(default)]
    pub job_id: Option<u64>,
    /// Stored transcript embedding; absent until embedding succeeded.
    #[serde(default)]
    pub embedding: Option<Vec<f64>>,
    /// Structured profile field, e.g. "4-6 years".
    #[serde(default)]
    pub declared_experience: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
}

impl CandidateRecord {
    pub fn new(id: u64, owner_id: u64) -> Self {
        Self {
            id,
            owner_id,
            ..Default::default()
        }
    }

    pub fn with_embedding(mut self, embedding: Vec<f64>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    pub fn with_declared_experience(mut self, text: impl Into<String>) -> Self {
        self.declared_experience = Some(text.into());
        self
    }

    pub fn with_transcript(mut self, text: impl Into<String>) -> Self {
        self.transcript = Some(text.into());
        self
    }

    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    pub fn with_owner_display_name(mut self, name: impl Into<String>) -> Self {
        self.owner_display_name = Some(name.into());
        self
    }

    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn with_job_id(mut self, job_id: u64) -> Self {
        self.job_id = Some(job_id);
        self
    }

    pub fn stored_vector(&self) -> Option<&[f64]> {
        self.embedding.as_deref()
    }

    /// Text to read declared experience from.
    ///
    /// The structured field wins when non-blank; otherwise the transcript,
    /// when non-blank.
    pub fn experience_source(&self) -> Option<&str> {
        non_blank(self.declared_experience.as_deref()).or_else(|| non_blank(self.transcript.as_deref()))
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
