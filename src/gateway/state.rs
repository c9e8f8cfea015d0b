use std::sync::Arc;

use crate::jd::JdExtractor;
use crate::search::SearchService;

#[derive(Clone)]
pub struct HandlerState {
    pub service: Arc<SearchService>,
    pub jd: Arc<JdExtractor>,
}

impl HandlerState {
    /// State with job-description extraction disabled.
    pub fn new(service: Arc<SearchService>) -> Self {
        Self {
            service,
            jd: Arc::new(JdExtractor::disabled()),
        }
    }

    pub fn with_jd_extractor(mut self, jd: JdExtractor) -> Self {
        self.jd = Arc::new(jd);
        self
    }
}
