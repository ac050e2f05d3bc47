mod artifact_resolver;
mod audio_service;
mod path_redaction;
mod scratch_workspace;

pub use artifact_resolver::{ArtifactNotFound, ProbePlan, resolve_artifact};
pub use audio_service::{
    AudioPayload, AudioService, AudioServiceConfig, AudioServiceError, DEFAULT_SEARCH_LIMIT,
    Delivery,
};
pub use path_redaction::{REDACTED_PATH, redact_paths};
pub use scratch_workspace::{ScratchKind, ScratchLease, ScratchSweeper, ScratchWorkspace};
