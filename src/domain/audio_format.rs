use std::fmt;

use serde::Deserialize;

/// MIME type served when an extension is not in the lookup table.
pub const DEFAULT_MIME_TYPE: &str = "audio/mpeg";

/// Audio containers the extraction engine or the transcoder may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum AudioContainer {
    M4a,
    Webm,
    Opus,
    Ogg,
    Mp3,
    Mp4,
}

impl AudioContainer {
    pub const ALL: [AudioContainer; 6] = [
        AudioContainer::M4a,
        AudioContainer::Webm,
        AudioContainer::Opus,
        AudioContainer::Ogg,
        AudioContainer::Mp3,
        AudioContainer::Mp4,
    ];

    /// Extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioContainer::M4a => "m4a",
            AudioContainer::Webm => "webm",
            AudioContainer::Opus => "opus",
            AudioContainer::Ogg => "ogg",
            AudioContainer::Mp3 => "mp3",
            AudioContainer::Mp4 => "mp4",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioContainer::M4a | AudioContainer::Mp4 => "audio/mp4",
            AudioContainer::Webm => "audio/webm",
            AudioContainer::Opus | AudioContainer::Ogg => "audio/ogg",
            AudioContainer::Mp3 => "audio/mpeg",
        }
    }

    /// Name yt-dlp's `--audio-format` expects; `None` when it cannot produce this container.
    pub fn extract_audio_codec(&self) -> Option<&'static str> {
        match self {
            AudioContainer::M4a => Some("m4a"),
            AudioContainer::Mp3 => Some("mp3"),
            AudioContainer::Opus => Some("opus"),
            AudioContainer::Ogg => Some("vorbis"),
            AudioContainer::Webm | AudioContainer::Mp4 => None,
        }
    }

    /// Accepts `"m4a"`, `".m4a"` or `".M4A"`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let normalized = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "m4a" => Some(AudioContainer::M4a),
            "webm" => Some(AudioContainer::Webm),
            "opus" => Some(AudioContainer::Opus),
            "ogg" => Some(AudioContainer::Ogg),
            "mp3" => Some(AudioContainer::Mp3),
            "mp4" => Some(AudioContainer::Mp4),
            _ => None,
        }
    }
}

impl fmt::Display for AudioContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl TryFrom<String> for AudioContainer {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_extension(&s).ok_or_else(|| format!("Unsupported audio container: {}", s))
    }
}

/// Maps a file extension to the MIME type used when serving it.
pub fn classify_extension(ext: &str) -> &'static str {
    AudioContainer::from_extension(ext)
        .map(|c| c.mime_type())
        .unwrap_or(DEFAULT_MIME_TYPE)
}
