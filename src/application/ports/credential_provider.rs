use std::io;

use async_trait::async_trait;

use crate::domain::CredentialConfig;

#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn resolve(&self) -> Result<CredentialConfig, CredentialError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("credential task failed: {0}")]
    Task(String),
}
