mod audio_format;
mod credential;
mod filename;
mod format_preference;
mod output_template;
mod resolved_artifact;
mod transcode_target;

pub use audio_format::{AudioContainer, DEFAULT_MIME_TYPE, classify_extension};
pub use credential::CredentialConfig;
pub use filename::{attachment_filename, sanitize_title};
pub use format_preference::{FormatPreference, FormatSelector};
pub use output_template::{EXTENSION_PLACEHOLDER, OutputTemplate};
pub use resolved_artifact::ResolvedArtifact;
pub use transcode_target::TranscodeTarget;
