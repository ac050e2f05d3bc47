use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use uuid::Uuid;

use crate::application::ports::{
    ClientHints, CredentialError, CredentialProvider, ExtractionError, ExtractionOptions,
    ExtractionRequest, MediaExtractor, SearchResult, TranscodeError, Transcoder,
};
use crate::domain::{
    AudioContainer, FormatPreference, OutputTemplate, ResolvedArtifact, TranscodeTarget,
    attachment_filename,
};

use super::artifact_resolver::{ArtifactNotFound, ProbePlan, resolve_artifact};
use super::path_redaction::redact_paths;
use super::scratch_workspace::{ScratchKind, ScratchLease, ScratchWorkspace};

pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Tunable pipeline behaviour.
#[derive(Debug, Clone)]
pub struct AudioServiceConfig {
    pub search_limit: usize,
    pub search_format: FormatPreference,
    pub stream_format: FormatPreference,
    pub download_format: FormatPreference,
    pub client_hints: ClientHints,
    pub transcode_target: TranscodeTarget,
    /// Run the local transcoder when the engine leaves a non-canonical artifact.
    pub transcode_fallback: bool,
}

impl Default for AudioServiceConfig {
    fn default() -> Self {
        Self {
            search_limit: DEFAULT_SEARCH_LIMIT,
            search_format: FormatPreference::audio_first(),
            stream_format: FormatPreference::audio_m4a_first(),
            download_format: FormatPreference::audio_m4a_first(),
            client_hints: ClientHints {
                player_clients: vec!["tv_embedded".to_string(), "android_vr".to_string()],
                player_skip: vec!["webpage".to_string(), "configs".to_string()],
            },
            transcode_target: TranscodeTarget::default(),
            transcode_fallback: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Inline,
    Attachment { filename: String },
}

/// Fully read audio ready to be sent; nothing is delivered before this exists.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub data: Bytes,
    pub mime_type: &'static str,
    pub delivery: Delivery,
}

pub struct AudioService<E, T>
where
    E: MediaExtractor,
    T: Transcoder,
{
    extractor: Arc<E>,
    transcoder: Arc<T>,
    credentials: Arc<dyn CredentialProvider>,
    workspace: Arc<ScratchWorkspace>,
    config: AudioServiceConfig,
}

impl<E, T> AudioService<E, T>
where
    E: MediaExtractor,
    T: Transcoder,
{
    pub fn new(
        extractor: Arc<E>,
        transcoder: Arc<T>,
        credentials: Arc<dyn CredentialProvider>,
        workspace: Arc<ScratchWorkspace>,
        config: AudioServiceConfig,
    ) -> Self {
        Self {
            extractor,
            transcoder,
            credentials,
            workspace,
            config,
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, AudioServiceError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AudioServiceError::InvalidRequest("Query is required"));
        }

        let credential = self.credentials.resolve().await?;
        let options = ExtractionOptions::new(self.config.search_format.clone())
            .with_client_hints(self.config.client_hints.clone())
            .with_credential(credential)
            .flat();

        let limit = self.config.search_limit;
        let mut results = self
            .extractor
            .search(query, limit, &options)
            .await
            .map_err(|e| self.client_safe(e))?;
        results.truncate(limit);

        tracing::info!(results = results.len(), "Search complete");
        Ok(results)
    }

    pub async fn stream(
        &self,
        url: &str,
        id: Option<&str>,
    ) -> Result<AudioPayload, AudioServiceError> {
        let url = required_url(url)?;
        let id = request_scoped_id(id);
        let mut lease = self.workspace.allocate(ScratchKind::Stream, &id);

        let credential = self.credentials.resolve().await?;
        let options = ExtractionOptions::new(self.config.stream_format.clone())
            .with_client_hints(self.config.client_hints.clone())
            .with_output_template(lease.template().clone())
            .with_credential(credential);

        let result = self
            .extractor
            .extract(&ExtractionRequest {
                source_url: url.to_string(),
                options,
            })
            .await
            .map_err(|e| self.client_safe(e))?;

        let artifact =
            locate_artifact(&mut lease, result.reported_filename, ProbePlan::stream()).await?;
        tracing::info!(extension = %artifact.extension, mime = artifact.mime_type, "Stream ready");

        let data = read_artifact(&artifact).await?;
        Ok(AudioPayload {
            data,
            mime_type: artifact.mime_type,
            delivery: Delivery::Inline,
        })
    }

    pub async fn download(
        &self,
        url: &str,
        id: Option<&str>,
        title: Option<&str>,
    ) -> Result<AudioPayload, AudioServiceError> {
        let url = required_url(url)?;
        let caller_id = id.map(str::trim).filter(|s| !s.is_empty());
        let title = title.map(str::trim);
        let scoped_id = request_scoped_id(caller_id);
        let mut lease = self.workspace.allocate(ScratchKind::Download, &scoped_id);
        let target = self.config.transcode_target;

        let credential = self.credentials.resolve().await?;
        let options = ExtractionOptions::new(self.config.download_format.clone())
            .with_client_hints(self.config.client_hints.clone())
            .with_output_template(lease.template().clone())
            .with_credential(credential)
            .with_post_process(target);

        let result = self
            .extractor
            .extract(&ExtractionRequest {
                source_url: url.to_string(),
                options,
            })
            .await
            .map_err(|e| self.client_safe(e))?;

        let artifact = locate_artifact(
            &mut lease,
            result.reported_filename,
            ProbePlan::download(target.container),
        )
        .await?;
        let artifact = self
            .ensure_canonical(lease.template(), artifact, &target)
            .await;
        tracing::info!(extension = %artifact.extension, "Download ready");

        let data = read_artifact(&artifact).await?;
        let filename = attachment_filename(title, caller_id, target.container.extension());
        Ok(AudioPayload {
            data,
            mime_type: target.container.mime_type(),
            delivery: Delivery::Attachment { filename },
        })
    }

    /// Logs the engine error in full and strips filesystem paths from what the client sees.
    fn client_safe(&self, error: ExtractionError) -> ExtractionError {
        tracing::warn!(error = %error, "Extraction failed");
        let root = self.workspace.root();
        match error {
            ExtractionError::Unavailable(m) => ExtractionError::Unavailable(redact_paths(&m, root)),
            ExtractionError::Failed(m) => ExtractionError::Failed(redact_paths(&m, root)),
            ExtractionError::Parse(m) => ExtractionError::Parse(redact_paths(&m, root)),
            ExtractionError::Timeout(after) => ExtractionError::Timeout(after),
        }
    }

    /// Transcodes a non-canonical artifact, keeping the raw one if that fails.
    async fn ensure_canonical(
        &self,
        template: &OutputTemplate,
        artifact: ResolvedArtifact,
        target: &TranscodeTarget,
    ) -> ResolvedArtifact {
        let already_canonical =
            AudioContainer::from_extension(&artifact.extension) == Some(target.container);
        if already_canonical || !self.config.transcode_fallback {
            return artifact;
        }

        let output = template.with_extension(target.container.extension());
        let outcome = match self
            .transcoder
            .transcode(&artifact.path, &output, target)
            .await
        {
            Ok(()) if output.is_file() => Ok(ResolvedArtifact::from_path(output)),
            Ok(()) => Err(TranscodeError::MissingOutput),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(transcoded) => transcoded,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    fallback = %artifact.extension,
                    "Transcoding failed, delivering raw artifact"
                );
                artifact
            }
        }
    }
}

/// Resolves the artifact on the blocking pool and ties it to `lease`.
async fn locate_artifact(
    lease: &mut ScratchLease,
    reported: Option<PathBuf>,
    plan: ProbePlan,
) -> Result<ResolvedArtifact, AudioServiceError> {
    let template = lease.template().clone();
    let artifact = tokio::task::spawn_blocking(move || {
        resolve_artifact(&template, reported.as_deref(), &plan)
    })
    .await
    .map_err(io::Error::other)??;
    lease.track(artifact.path.clone());
    Ok(artifact)
}

fn required_url(url: &str) -> Result<&str, AudioServiceError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AudioServiceError::InvalidRequest("URL is required"));
    }
    Ok(url)
}

fn request_scoped_id(id: Option<&str>) -> String {
    id.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

async fn read_artifact(artifact: &ResolvedArtifact) -> Result<Bytes, AudioServiceError> {
    let data = tokio::fs::read(&artifact.path).await?;
    Ok(Bytes::from(data))
}

#[derive(Debug, thiserror::Error)]
pub enum AudioServiceError {
    #[error("{0}")]
    InvalidRequest(&'static str),
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("audio file was not produced")]
    ArtifactNotFound(#[from] ArtifactNotFound),
    #[error("internal storage error")]
    Io(#[from] io::Error),
    #[error("internal storage error")]
    Credential(#[from] CredentialError),
}

impl AudioServiceError {
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, AudioServiceError::InvalidRequest(_))
    }
}
