use crate::domain::{CredentialConfig, FormatPreference, OutputTemplate, TranscodeTarget};

/// Client-emulation hints forwarded to the extraction engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientHints {
    pub player_clients: Vec<String>,
    pub player_skip: Vec<String>,
}

impl ClientHints {
    pub fn is_empty(&self) -> bool {
        self.player_clients.is_empty() && self.player_skip.is_empty()
    }
}

/// Everything the extraction engine needs to know for one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionOptions {
    pub format: FormatPreference,
    pub client_hints: ClientHints,
    pub output_template: Option<OutputTemplate>,
    pub credential: CredentialConfig,
    pub flat_results_only: bool,
    pub post_process: Option<TranscodeTarget>,
}

impl ExtractionOptions {
    pub fn new(format: FormatPreference) -> Self {
        Self {
            format,
            client_hints: ClientHints::default(),
            output_template: None,
            credential: CredentialConfig::anonymous(),
            flat_results_only: false,
            post_process: None,
        }
    }

    pub fn with_client_hints(mut self, hints: ClientHints) -> Self {
        self.client_hints = hints;
        self
    }

    pub fn with_output_template(mut self, template: OutputTemplate) -> Self {
        self.output_template = Some(template);
        self
    }

    pub fn with_credential(mut self, credential: CredentialConfig) -> Self {
        self.credential = credential;
        self
    }

    pub fn flat(mut self) -> Self {
        self.flat_results_only = true;
        self
    }

    pub fn with_post_process(mut self, target: TranscodeTarget) -> Self {
        self.post_process = Some(target);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRequest {
    pub source_url: String,
    pub options: ExtractionOptions,
}
