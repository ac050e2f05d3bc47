use std::path::PathBuf;

use super::audio_format::classify_extension;

/// A file that existed on disk when the resolver probed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub path: PathBuf,
    /// Lowercase, without the leading dot. Empty when the file has none.
    pub extension: String,
    pub mime_type: &'static str,
}

impl ResolvedArtifact {
    pub fn from_path(path: PathBuf) -> Self {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let mime_type = classify_extension(&extension);
        Self {
            path,
            extension,
            mime_type,
        }
    }
}
