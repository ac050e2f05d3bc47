use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{TranscodeError, Transcoder};
use crate::domain::TranscodeTarget;

/// Copies the input to the output, or fails when built with `failing()`.
#[derive(Default)]
pub struct MockTranscoder {
    fail: bool,
    calls: AtomicUsize,
}

impl MockTranscoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transcoder for MockTranscoder {
    async fn transcode(
        &self,
        input: &Path,
        output: &Path,
        _target: &TranscodeTarget,
    ) -> Result<(), TranscodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TranscodeError::Failed("mock transcoder failure".to_string()));
        }
        tokio::fs::copy(input, output)
            .await
            .map_err(|e| TranscodeError::Failed(e.to_string()))?;
        Ok(())
    }
}
