use std::path::{Path, PathBuf};

/// Site credentials handed to the extraction engine. Empty means anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialConfig {
    cookie_file: Option<PathBuf>,
}

impl CredentialConfig {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_cookie_file(path: impl Into<PathBuf>) -> Self {
        Self {
            cookie_file: Some(path.into()),
        }
    }

    pub fn cookie_file(&self) -> Option<&Path> {
        self.cookie_file.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.cookie_file.is_none()
    }
}
