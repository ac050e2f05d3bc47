mod ffmpeg_transcoder;
mod mock_transcoder;

pub use ffmpeg_transcoder::{FfmpegConfig, FfmpegTranscoder};
pub use mock_transcoder::MockTranscoder;
