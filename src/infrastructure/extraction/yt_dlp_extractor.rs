use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{
    ExtractionError, ExtractionOptions, ExtractionRequest, ExtractionResult, MediaExtractor,
    SearchResult,
};
use crate::infrastructure::process::{ProcessError, run_with_timeout};

pub const DEFAULT_WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

const UNTITLED: &str = "Untitled";
const UNKNOWN_UPLOADER: &str = "Unknown";

#[derive(Debug, Clone)]
pub struct YtDlpConfig {
    pub binary: String,
    pub search_timeout: Duration,
    pub extract_timeout: Duration,
    pub watch_url_base: String,
}

impl Default for YtDlpConfig {
    fn default() -> Self {
        Self {
            binary: "yt-dlp".to_string(),
            search_timeout: Duration::from_secs(60),
            extract_timeout: Duration::from_secs(300),
            watch_url_base: DEFAULT_WATCH_URL_BASE.to_string(),
        }
    }
}

/// Media extraction backed by the `yt-dlp` command line tool.
pub struct YtDlpExtractor {
    config: YtDlpConfig,
}

#[derive(Deserialize)]
struct FlatPlaylist {
    entries: Option<Vec<Option<FlatEntry>>>,
}

#[derive(Deserialize)]
struct FlatEntry {
    id: Option<String>,
    title: Option<String>,
    uploader: Option<String>,
    duration: Option<f64>,
    thumbnail: Option<String>,
    view_count: Option<u64>,
}

#[derive(Deserialize)]
struct InfoJson {
    id: Option<String>,
    title: Option<String>,
    filename: Option<String>,
    #[serde(rename = "_filename")]
    legacy_filename: Option<String>,
}

impl YtDlpExtractor {
    pub fn new(config: YtDlpConfig) -> Self {
        Self { config }
    }

    pub fn search_args(
        &self,
        query: &str,
        limit: usize,
        options: &ExtractionOptions,
    ) -> Vec<String> {
        let mut args = Self::common_args(options);
        if options.flat_results_only {
            args.push("--flat-playlist".to_string());
        }
        args.extend([
            "--dump-single-json".to_string(),
            "--format".to_string(),
            options.format.to_string(),
            "--".to_string(),
            format!("ytsearch{}:{}", limit, query),
        ]);
        args
    }

    pub fn extract_args(&self, request: &ExtractionRequest) -> Vec<String> {
        let options = &request.options;
        let mut args = Self::common_args(options);
        args.extend([
            "--format".to_string(),
            options.format.to_string(),
            "--no-simulate".to_string(),
            "--dump-json".to_string(),
        ]);

        if let Some(template) = &options.output_template {
            args.push("--output".to_string());
            args.push(template.render());
        }

        // Containers without a yt-dlp codec are left to the local transcoder.
        let post_process = options
            .post_process
            .and_then(|t| t.container.extract_audio_codec().map(|codec| (codec, t)));
        if let Some((codec, target)) = post_process {
            args.extend([
                "--extract-audio".to_string(),
                "--audio-format".to_string(),
                codec.to_string(),
                "--audio-quality".to_string(),
                format!("{}K", target.bitrate_kbps),
            ]);
        }

        args.push("--".to_string());
        args.push(request.source_url.clone());
        args
    }

    fn common_args(options: &ExtractionOptions) -> Vec<String> {
        let mut args = vec![
            "--quiet".to_string(),
            "--no-warnings".to_string(),
            "--no-progress".to_string(),
            "--no-playlist".to_string(),
        ];

        let hints = &options.client_hints;
        if !hints.is_empty() {
            let mut parts = Vec::new();
            if !hints.player_clients.is_empty() {
                parts.push(format!("player_client={}", hints.player_clients.join(",")));
            }
            if !hints.player_skip.is_empty() {
                parts.push(format!("player_skip={}", hints.player_skip.join(",")));
            }
            args.push("--extractor-args".to_string());
            args.push(format!("youtube:{}", parts.join(";")));
        }

        if let Some(cookie_file) = options.credential.cookie_file() {
            args.push("--cookies".to_string());
            args.push(cookie_file.display().to_string());
        }

        args
    }

    /// Maps `--flat-playlist` JSON to results, keeping upstream order.
    pub fn parse_search_output(
        stdout: &[u8],
        watch_url_base: &str,
    ) -> Result<Vec<SearchResult>, ExtractionError> {
        let playlist: FlatPlaylist = serde_json::from_slice(stdout)
            .map_err(|e| ExtractionError::Parse(format!("search JSON: {}", e)))?;

        Ok(playlist
            .entries
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(|entry| {
                let id = entry.id.unwrap_or_default();
                SearchResult {
                    webpage_url: format!("{}{}", watch_url_base, id),
                    title: entry.title.unwrap_or_else(|| UNTITLED.to_string()),
                    uploader: entry
                        .uploader
                        .unwrap_or_else(|| UNKNOWN_UPLOADER.to_string()),
                    duration_seconds: entry
                        .duration
                        .filter(|d| d.is_finite() && *d > 0.0)
                        .map(|d| d as u64)
                        .unwrap_or(0),
                    thumbnail: entry.thumbnail.unwrap_or_default(),
                    view_count: entry.view_count.unwrap_or(0),
                    id,
                }
            })
            .collect())
    }

    /// Reads the info JSON printed for a download; the last JSON line wins.
    pub fn parse_extract_output(stdout: &[u8]) -> Result<ExtractionResult, ExtractionError> {
        let text = String::from_utf8_lossy(stdout);
        let line = text
            .lines()
            .map(str::trim)
            .rev()
            .find(|l| l.starts_with('{'))
            .ok_or_else(|| ExtractionError::Parse("no info JSON in output".to_string()))?;

        let info: InfoJson = serde_json::from_str(line)
            .map_err(|e| ExtractionError::Parse(format!("info JSON: {}", e)))?;

        Ok(ExtractionResult {
            reported_filename: info.filename.or(info.legacy_filename).map(PathBuf::from),
            media_id: info.id,
            title: info.title,
        })
    }

    async fn run(&self, args: Vec<String>, limit: Duration) -> Result<Vec<u8>, ExtractionError> {
        let output = run_with_timeout(&self.config.binary, &args, limit)
            .await
            .map_err(|e| match e {
                ProcessError::Spawn { .. } => ExtractionError::Unavailable(e.to_string()),
                ProcessError::TimedOut { after, .. } => ExtractionError::Timeout(after),
                ProcessError::Wait { .. } => ExtractionError::Failed(e.to_string()),
            })?;

        if !output.success() {
            return Err(ExtractionError::Failed(output.error_message()));
        }
        Ok(output.stdout)
    }
}

#[async_trait]
impl MediaExtractor for YtDlpExtractor {
    #[tracing::instrument(skip(self, query, options))]
    async fn search(
        &self,
        query: &str,
        limit: usize,
        options: &ExtractionOptions,
    ) -> Result<Vec<SearchResult>, ExtractionError> {
        let args = self.search_args(query, limit, options);
        let stdout = self.run(args, self.config.search_timeout).await?;
        let results = Self::parse_search_output(&stdout, &self.config.watch_url_base)?;
        tracing::debug!(count = results.len(), "yt-dlp search finished");
        Ok(results)
    }

    #[tracing::instrument(skip(self, request), fields(post_process = request.options.post_process.is_some()))]
    async fn extract(
        &self,
        request: &ExtractionRequest,
    ) -> Result<ExtractionResult, ExtractionError> {
        let args = self.extract_args(request);
        let stdout = self.run(args, self.config.extract_timeout).await?;
        let result = Self::parse_extract_output(&stdout)?;
        tracing::debug!(
            media_id = result.media_id.as_deref().unwrap_or("-"),
            reported = ?result.reported_filename,
            "yt-dlp extraction finished"
        );
        Ok(result)
    }
}
