use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;

use crate::application::ports::{CredentialError, CredentialProvider};
use crate::domain::CredentialConfig;

pub const DEFAULT_SCRATCH_FILE_NAME: &str = "yt_cookies.txt";

/// Resolves a Netscape cookie file for the extraction engine.
///
/// Inline content takes precedence and is written into the scratch directory;
/// otherwise a local cookie file is used when present; otherwise access is
/// anonymous.
pub struct CookieFileProvider {
    inline_content: Option<String>,
    scratch_file: PathBuf,
    local_file: Option<PathBuf>,
}

impl CookieFileProvider {
    pub fn new(
        inline_content: Option<String>,
        scratch_file: PathBuf,
        local_file: Option<PathBuf>,
    ) -> Self {
        let inline_content = inline_content
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        Self {
            inline_content,
            scratch_file,
            local_file,
        }
    }

    /// Reads inline content from `env_var`; an unset variable means none.
    pub fn from_env(env_var: &str, scratch_file: PathBuf, local_file: Option<PathBuf>) -> Self {
        Self::new(std::env::var(env_var).ok(), scratch_file, local_file)
    }

    pub fn has_inline_content(&self) -> bool {
        self.inline_content.is_some()
    }

    /// Replaces the scratch file atomically so concurrent readers never see a partial write.
    fn persist(content: &str, target: &Path) -> Result<(), CredentialError> {
        let dir = target.parent().unwrap_or_else(|| Path::new("."));
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(content.as_bytes())?;
        staged.flush()?;
        staged.persist(target).map_err(|e| CredentialError::Io(e.error))?;
        Ok(())
    }
}

#[async_trait]
impl CredentialProvider for CookieFileProvider {
    async fn resolve(&self) -> Result<CredentialConfig, CredentialError> {
        if let Some(content) = &self.inline_content {
            let content = content.clone();
            let target = self.scratch_file.clone();
            tokio::task::spawn_blocking(move || Self::persist(&content, &target))
                .await
                .map_err(|e| CredentialError::Task(e.to_string()))??;
            return Ok(CredentialConfig::with_cookie_file(self.scratch_file.clone()));
        }

        if let Some(local) = &self.local_file {
            if tokio::fs::try_exists(local).await.unwrap_or(false) {
                return Ok(CredentialConfig::with_cookie_file(local.clone()));
            }
        }

        Ok(CredentialConfig::anonymous())
    }
}
