use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::TranscodeTarget;

#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn transcode(
        &self,
        input: &Path,
        output: &Path,
        target: &TranscodeTarget,
    ) -> Result<(), TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("transcoder unavailable: {0}")]
    Unavailable(String),
    #[error("transcoding failed: {0}")]
    Failed(String),
    #[error("transcoding timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("transcoder produced no output")]
    MissingOutput,
}
