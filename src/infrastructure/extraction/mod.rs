mod mock_extractor;
mod yt_dlp_extractor;

pub use mock_extractor::MockMediaExtractor;
pub use yt_dlp_extractor::{DEFAULT_WATCH_URL_BASE, YtDlpConfig, YtDlpExtractor};
