//! Deterministic in-process embedding gateway.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

use super::{EmbeddingError, EmbeddingGateway, VectorLookup};

/// Returns registered vectors for known texts and BLAKE3-seeded unit vectors
/// for everything else.
pub struct MockEmbeddingGateway {
    dim: usize,
    fixed: RwLock<HashMap<String, Vec<f64>>>,
    failing: AtomicBool,
    calls: AtomicUsize,
    inputs: Mutex<Vec<String>>,
}

impl MockEmbeddingGateway {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            fixed: RwLock::new(HashMap::new()),
            failing: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
            inputs: Mutex::new(Vec::new()),
        }
    }

    /// Registers the vector returned for exactly `text`.
    pub fn with_vector(self, text: impl Into<String>, vector: Vec<f64>) -> Self {
        self.set_vector(text, vector);
        self
    }

    pub fn set_vector(&self, text: impl Into<String>, vector: Vec<f64>) {
        self.fixed.write().insert(text.into(), vector);
    }

    /// Makes every subsequent call fail with [`EmbeddingError::Unavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Texts received, in call order.
    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().clone()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Unit vector derived from the BLAKE3 XOF stream of `text`.
    pub fn deterministic_vector(&self, text: &str) -> Vec<f64> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(text.as_bytes());
        let mut reader = hasher.finalize_xof();

        let mut bytes = vec![0u8; self.dim * 4];
        reader.fill(&mut bytes);

        let raw: Vec<f64> = bytes
            .chunks_exact(4)
            .map(|chunk| {
                let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                (word as f64 / u32::MAX as f64) * 2.0 - 1.0
            })
            .collect();

        let norm = crate::vector::l2_norm(&raw);
        if norm == 0.0 {
            return raw;
        }
        raw.into_iter().map(|x| x / norm).collect()
    }
}

impl Default for MockEmbeddingGateway {
    fn default() -> Self {
        Self::new(8)
    }
}

impl VectorLookup for MockEmbeddingGateway {}

#[async_trait]
impl EmbeddingGateway for MockEmbeddingGateway {
    async fn embed_text(&self, text: &str) -> Result<Vec<f64>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inputs.lock().push(text.to_string());

        if self.failing.load(Ordering::SeqCst) {
            return Err(EmbeddingError::unavailable(
                "mock provider configured to fail",
            ));
        }

        if let Some(vector) = self.fixed.read().get(text) {
            return Ok(vector.clone());
        }

        Ok(self.deterministic_vector(text))
    }
}
