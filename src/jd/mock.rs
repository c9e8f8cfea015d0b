//! Canned completion provider.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{CompletionProvider, JdError};

/// Answers every prompt with the same reply and records the prompts it saw.
pub struct MockCompletionProvider {
    reply: Mutex<String>,
    failing: AtomicBool,
    prompts: Mutex<Vec<String>>,
}

impl MockCompletionProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Mutex::new(reply.into()),
            failing: AtomicBool::new(false),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn set_reply(&self, reply: impl Into<String>) {
        *self.reply.lock() = reply.into();
    }

    /// Makes every subsequent call fail with [`JdError::Unavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, prompt: &str) -> Result<String, JdError> {
        self.prompts.lock().push(prompt.to_string());
        if self.failing.load(Ordering::SeqCst) {
            return Err(JdError::unavailable("mock completion provider is failing"));
        }
        Ok(self.reply.lock().clone())
    }
}
