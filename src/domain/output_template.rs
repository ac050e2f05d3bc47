use std::fmt;
use std::path::{Path, PathBuf};

/// Placeholder the extraction engine replaces with the chosen container.
pub const EXTENSION_PLACEHOLDER: &str = "%(ext)s";

/// Output path handed to the extraction engine: `<stem>.%(ext)s`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate {
    stem: PathBuf,
}

impl OutputTemplate {
    pub fn new(stem: impl Into<PathBuf>) -> Self {
        Self { stem: stem.into() }
    }

    pub fn stem(&self) -> &Path {
        &self.stem
    }

    /// The stem with `extension` appended; `extension` may carry a leading dot.
    pub fn with_extension(&self, extension: &str) -> PathBuf {
        let mut name = self.stem.clone().into_os_string();
        name.push(".");
        name.push(extension.trim_start_matches('.'));
        PathBuf::from(name)
    }

    pub fn render(&self) -> String {
        format!("{}.{}", self.stem.display(), EXTENSION_PLACEHOLDER)
    }
}

impl fmt::Display for OutputTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
