use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::ports::ClientHints;
use crate::application::services::{AudioServiceConfig, DEFAULT_SEARCH_LIMIT};
use crate::domain::{AudioContainer, FormatPreference, TranscodeTarget};
use crate::infrastructure::extraction::{DEFAULT_WATCH_URL_BASE, YtDlpConfig};
use crate::infrastructure::observability::TracingConfig;
use crate::infrastructure::transcoding::FfmpegConfig;

use super::Environment;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";
const LIST_KEYS: [&str; 5] = [
    "extractor.player_clients",
    "extractor.player_skip",
    "extractor.search_format",
    "extractor.stream_format",
    "extractor.download_format",
];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub workspace: WorkspaceSettings,
    pub extractor: ExtractorSettings,
    pub transcoder: TranscoderSettings,
    pub credentials: CredentialSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub index_file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceSettings {
    pub root: String,
    pub retention_secs: u64,
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorSettings {
    pub binary: String,
    pub search_limit: usize,
    pub search_timeout_secs: u64,
    pub extract_timeout_secs: u64,
    pub search_format: FormatPreference,
    pub stream_format: FormatPreference,
    pub download_format: FormatPreference,
    pub player_clients: Vec<String>,
    pub player_skip: Vec<String>,
    pub watch_url_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscoderSettings {
    pub enabled: bool,
    pub binary: String,
    pub container: AudioContainer,
    pub bitrate_kbps: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CredentialSettings {
    pub env_var: String,
    pub local_file: Option<String>,
    pub scratch_file_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.<env>.*` if present, then `APP__SECTION__KEY` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let file_name = environment.settings_file();

        let mut env_source = config::Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .list_separator(",")
            .try_parsing(true);
        for key in LIST_KEYS {
            env_source = env_source.with_list_parse_key(key);
        }

        let settings: Self = Self::defaults()?
            .add_source(File::with_name(&file_name).required(false))
            .add_source(env_source)
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects values the external tools would refuse at request time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transcoder.container.extract_audio_codec().is_none() {
            return Err(ConfigError::Message(format!(
                "transcoder.container '{}' is not supported; use mp3, m4a, opus or ogg",
                self.transcoder.container
            )));
        }
        if self.extractor.search_limit == 0 {
            return Err(ConfigError::Message(
                "extractor.search_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tracing_config(&self, environment: Environment) -> TracingConfig {
        TracingConfig::new(environment.as_str(), self.logging.json)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let workspace_root = std::env::temp_dir().join("audiograb");

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.index_file", "index.html")?
            .set_default("workspace.root", workspace_root.display().to_string())?
            .set_default("workspace.retention_secs", 3600)?
            .set_default("workspace.sweep_interval_secs", 300)?
            .set_default("extractor.binary", "yt-dlp")?
            .set_default("extractor.search_limit", DEFAULT_SEARCH_LIMIT as i64)?
            .set_default("extractor.search_timeout_secs", 60)?
            .set_default("extractor.extract_timeout_secs", 300)?
            .set_default("extractor.search_format", vec!["bestaudio", "best"])?
            .set_default(
                "extractor.stream_format",
                vec!["bestaudio[ext=m4a]", "bestaudio", "best"],
            )?
            .set_default(
                "extractor.download_format",
                vec!["bestaudio[ext=m4a]", "bestaudio", "best"],
            )?
            .set_default("extractor.player_clients", vec!["tv_embedded", "android_vr"])?
            .set_default("extractor.player_skip", vec!["webpage", "configs"])?
            .set_default("extractor.watch_url_base", DEFAULT_WATCH_URL_BASE)?
            .set_default("transcoder.enabled", true)?
            .set_default("transcoder.binary", "ffmpeg")?
            .set_default("transcoder.container", "mp3")?
            .set_default("transcoder.bitrate_kbps", 320)?
            .set_default("transcoder.timeout_secs", 300)?
            .set_default("credentials.env_var", "YOUTUBE_COOKIES")?
            .set_default("credentials.local_file", "cookies.txt")?
            .set_default("credentials.scratch_file_name", "yt_cookies.txt")?
            .set_default("logging.json", false)
    }

    pub fn workspace_root(&self) -> PathBuf {
        PathBuf::from(&self.workspace.root)
    }

    pub fn audio_service_config(&self) -> AudioServiceConfig {
        AudioServiceConfig {
            search_limit: self.extractor.search_limit,
            search_format: self.extractor.search_format.clone(),
            stream_format: self.extractor.stream_format.clone(),
            download_format: self.extractor.download_format.clone(),
            client_hints: ClientHints {
                player_clients: self.extractor.player_clients.clone(),
                player_skip: self.extractor.player_skip.clone(),
            },
            transcode_target: TranscodeTarget {
                container: self.transcoder.container,
                bitrate_kbps: self.transcoder.bitrate_kbps,
            },
            transcode_fallback: self.transcoder.enabled,
        }
    }

    pub fn yt_dlp_config(&self) -> YtDlpConfig {
        YtDlpConfig {
            binary: self.extractor.binary.clone(),
            search_timeout: Duration::from_secs(self.extractor.search_timeout_secs),
            extract_timeout: Duration::from_secs(self.extractor.extract_timeout_secs),
            watch_url_base: self.extractor.watch_url_base.clone(),
        }
    }

    pub fn ffmpeg_config(&self) -> FfmpegConfig {
        FfmpegConfig {
            binary: self.transcoder.binary.clone(),
            timeout: Duration::from_secs(self.transcoder.timeout_secs),
        }
    }
}
