mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    CredentialSettings, ExtractorSettings, LoggingSettings, ServerSettings, Settings,
    TranscoderSettings, WorkspaceSettings,
};
