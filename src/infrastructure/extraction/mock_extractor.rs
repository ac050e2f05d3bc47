use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{
    ExtractionError, ExtractionOptions, ExtractionRequest, ExtractionResult, MediaExtractor,
    SearchResult,
};
use crate::domain::AudioContainer;

/// In-process stand-in for the extraction engine.
///
/// Downloads write the source URL as file content to `<stem>.<produced>`, or to
/// the post-process container when `honour_post_process` is set.
pub struct MockMediaExtractor {
    search_results: Vec<SearchResult>,
    produced: Option<AudioContainer>,
    reported: AudioContainer,
    honour_post_process: bool,
    failure: Option<String>,
    calls: AtomicUsize,
    last_options: Mutex<Option<ExtractionOptions>>,
}

impl MockMediaExtractor {
    pub fn new() -> Self {
        Self {
            search_results: Vec::new(),
            produced: Some(AudioContainer::Webm),
            reported: AudioContainer::Webm,
            honour_post_process: false,
            failure: None,
            calls: AtomicUsize::new(0),
            last_options: Mutex::new(None),
        }
    }

    pub fn with_search_results(mut self, results: Vec<SearchResult>) -> Self {
        self.search_results = results;
        self
    }

    /// Container written to disk; `None` writes nothing.
    pub fn producing(mut self, container: Option<AudioContainer>) -> Self {
        self.produced = container;
        self
    }

    /// Extension of the filename the engine claims it wrote.
    pub fn reporting(mut self, container: AudioContainer) -> Self {
        self.reported = container;
        self
    }

    pub fn honouring_post_process(mut self) -> Self {
        self.honour_post_process = true;
        self
    }

    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_options(&self) -> Option<ExtractionOptions> {
        self.last_options
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn record(&self, options: &ExtractionOptions) -> Result<(), ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_options.lock() {
            *guard = Some(options.clone());
        }
        match &self.failure {
            Some(message) => Err(ExtractionError::Failed(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockMediaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaExtractor for MockMediaExtractor {
    async fn search(
        &self,
        _query: &str,
        limit: usize,
        options: &ExtractionOptions,
    ) -> Result<Vec<SearchResult>, ExtractionError> {
        self.record(options)?;
        Ok(self.search_results.iter().take(limit).cloned().collect())
    }

    async fn extract(
        &self,
        request: &ExtractionRequest,
    ) -> Result<ExtractionResult, ExtractionError> {
        self.record(&request.options)?;

        let template = request
            .options
            .output_template
            .as_ref()
            .ok_or_else(|| ExtractionError::Failed("no output template".to_string()))?;

        let produced = match (&request.options.post_process, self.honour_post_process) {
            (Some(target), true) => Some(target.container),
            _ => self.produced,
        };

        if let Some(container) = produced {
            tokio::fs::write(
                template.with_extension(container.extension()),
                request.source_url.as_bytes(),
            )
            .await
            .map_err(|e| ExtractionError::Failed(e.to_string()))?;
        }

        Ok(ExtractionResult {
            reported_filename: Some(template.with_extension(self.reported.extension())),
            media_id: Some("mock".to_string()),
            title: None,
        })
    }
}
