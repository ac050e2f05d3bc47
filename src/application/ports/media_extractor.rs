use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use super::extraction_options::{ExtractionOptions, ExtractionRequest};
use super::search_result::SearchResult;

/// Outcome of a download reported by the extraction engine.
///
/// `reported_filename` is what the engine expected to write; the file on
/// disk may carry a different extension.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub reported_filename: Option<PathBuf>,
    pub media_id: Option<String>,
    pub title: Option<String>,
}

#[async_trait]
pub trait MediaExtractor: Send + Sync {
    async fn search(
        &self,
        query: &str,
        limit: usize,
        options: &ExtractionOptions,
    ) -> Result<Vec<SearchResult>, ExtractionError>;

    async fn extract(
        &self,
        request: &ExtractionRequest,
    ) -> Result<ExtractionResult, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("extraction engine unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Failed(String),
    #[error("extraction timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("unreadable engine output: {0}")]
    Parse(String),
}
