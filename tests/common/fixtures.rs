//! Shared candidate fixtures.
//!
//! Vectors are 2-D unit vectors so that cosine similarity against the
//! `[1, 0]` query axis equals the first component.

use std::path::PathBuf;

use tempfile::TempDir;
use vprofile::{CandidateRecord, MockEmbeddingGateway};

/// Unit vector whose cosine with `[1, 0]` is `score`.
pub fn at(score: f64) -> Vec<f64> {
    vec![score, (1.0 - score * score).sqrt()]
}

pub fn candidate(id: u64, score: f64) -> CandidateRecord {
    CandidateRecord::new(id, 1000 + id)
        .with_embedding(at(score))
        .with_video_url(format!("https://cdn.example/videos/{id}.mp4"))
        .with_thumbnail_url(format!("https://cdn.example/thumbs/{id}.jpg"))
        .with_owner_display_name(format!("Candidate{id}"))
}

/// A small roster used across integration tests.
pub fn roster() -> Vec<CandidateRecord> {
    vec![
        candidate(1, 0.92).with_declared_experience("6 years"),
        candidate(2, 0.88).with_declared_experience("2-4 years"),
        candidate(3, 0.81).with_transcript("I have worked in fintech for 3 years."),
        candidate(4, 0.74),
        candidate(5, 0.55).with_declared_experience("10 years"),
        CandidateRecord::new(6, 1006).with_transcript("Still processing"),
    ]
}

/// Embedder that maps the common test queries onto the `[1, 0]` axis.
pub fn embedder() -> MockEmbeddingGateway {
    MockEmbeddingGateway::new(2)
        .with_vector("query: fintech analyst", vec![1.0, 0.0])
        .with_vector("query: fintech analyst with 3+ years", vec![1.0, 0.0])
        .with_vector("query: fintech analyst 2-5 years", vec![1.0, 0.0])
        .with_vector("query: fintech expertise and skills", vec![1.0, 0.0])
        .with_vector("query: design expertise and skills", vec![0.0, 1.0])
}

/// Writes `records` as a JSON corpus file inside a fresh temp dir.
pub fn write_corpus(records: &[CandidateRecord]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("candidates.json");
    let json = serde_json::to_vec_pretty(records).expect("serialize corpus");
    std::fs::write(&path, json).expect("write corpus");
    (dir, path)
}
