use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{TranscodeError, Transcoder};
use crate::domain::{AudioContainer, TranscodeTarget};
use crate::infrastructure::process::{ProcessError, run_with_timeout};

#[derive(Debug, Clone)]
pub struct FfmpegConfig {
    pub binary: String,
    pub timeout: Duration,
}

impl Default for FfmpegConfig {
    fn default() -> Self {
        Self {
            binary: "ffmpeg".to_string(),
            timeout: Duration::from_secs(300),
        }
    }
}

pub struct FfmpegTranscoder {
    config: FfmpegConfig,
}

impl FfmpegTranscoder {
    pub fn new(config: FfmpegConfig) -> Self {
        Self { config }
    }

    pub fn args(input: &Path, output: &Path, target: &TranscodeTarget) -> Vec<String> {
        vec![
            "-hide_banner".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-nostdin".to_string(),
            "-y".to_string(),
            "-i".to_string(),
            input.display().to_string(),
            "-vn".to_string(),
            "-codec:a".to_string(),
            encoder_for(target.container).to_string(),
            "-b:a".to_string(),
            format!("{}k", target.bitrate_kbps),
            output.display().to_string(),
        ]
    }
}

fn encoder_for(container: AudioContainer) -> &'static str {
    match container {
        AudioContainer::Mp3 => "libmp3lame",
        AudioContainer::M4a | AudioContainer::Mp4 => "aac",
        AudioContainer::Opus | AudioContainer::Webm => "libopus",
        AudioContainer::Ogg => "libvorbis",
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    #[tracing::instrument(skip(self, input, output), fields(container = %target.container))]
    async fn transcode(
        &self,
        input: &Path,
        output: &Path,
        target: &TranscodeTarget,
    ) -> Result<(), TranscodeError> {
        let args = Self::args(input, output, target);
        let result = run_with_timeout(&self.config.binary, &args, self.config.timeout)
            .await
            .map_err(|e| match e {
                ProcessError::Spawn { .. } => TranscodeError::Unavailable(e.to_string()),
                ProcessError::TimedOut { after, .. } => TranscodeError::Timeout(after),
                ProcessError::Wait { .. } => TranscodeError::Failed(e.to_string()),
            })?;

        if !result.success() {
            return Err(TranscodeError::Failed(result.error_message()));
        }

        tracing::debug!("ffmpeg transcoding finished");
        Ok(())
    }
}
