use std::path::{Path, PathBuf};

use crate::domain::{AudioContainer, OutputTemplate, ResolvedArtifact};

const STREAM_FALLBACKS: &[AudioContainer] = &[
    AudioContainer::M4a,
    AudioContainer::Webm,
    AudioContainer::Opus,
    AudioContainer::Ogg,
    AudioContainer::Mp4,
];

const DOWNLOAD_FALLBACKS: &[AudioContainer] = &[
    AudioContainer::M4a,
    AudioContainer::Webm,
    AudioContainer::Opus,
    AudioContainer::Ogg,
];

/// Order in which candidate extensions are probed against a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbePlan {
    canonical: Option<AudioContainer>,
    fallbacks: &'static [AudioContainer],
}

impl ProbePlan {
    pub fn stream() -> Self {
        Self {
            canonical: None,
            fallbacks: STREAM_FALLBACKS,
        }
    }

    /// Transcoded output first, then the raw containers the engine may leave behind.
    pub fn download(canonical: AudioContainer) -> Self {
        Self {
            canonical: Some(canonical),
            fallbacks: DOWNLOAD_FALLBACKS,
        }
    }

    pub fn candidates(&self) -> Vec<AudioContainer> {
        let mut ordered: Vec<AudioContainer> = self.canonical.into_iter().collect();
        for container in self.fallbacks {
            if !ordered.contains(container) {
                ordered.push(*container);
            }
        }
        ordered
    }
}

#[derive(Debug, thiserror::Error)]
#[error("no audio artifact found")]
pub struct ArtifactNotFound;

/// Finds the file the engine actually produced for `template`.
///
/// The stem comes from the reported filename when the engine gave one inside
/// the scratch directory, otherwise from the template itself. Candidates are
/// probed in plan order, then the reported filename as-is.
pub fn resolve_artifact(
    template: &OutputTemplate,
    reported: Option<&Path>,
    plan: &ProbePlan,
) -> Result<ResolvedArtifact, ArtifactNotFound> {
    let reported = reported.filter(|p| p.parent() == template.stem().parent());

    let stem = match reported {
        Some(path) => OutputTemplate::new(path.with_extension("")),
        None => template.clone(),
    };

    let probed = plan
        .candidates()
        .into_iter()
        .map(|container| stem.with_extension(container.extension()))
        .find(|candidate| candidate.is_file());

    let found: Option<PathBuf> = probed.or_else(|| {
        reported
            .filter(|path| path.is_file())
            .map(Path::to_path_buf)
    });

    match found {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Artifact resolved");
            Ok(ResolvedArtifact::from_path(path))
        }
        None => {
            tracing::warn!(stem = %stem.stem().display(), "No artifact matched any candidate");
            Err(ArtifactNotFound)
        }
    }
}
