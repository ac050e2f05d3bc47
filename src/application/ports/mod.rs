mod credential_provider;
mod extraction_options;
mod media_extractor;
mod search_result;
mod transcoder;

pub use credential_provider::{CredentialError, CredentialProvider};
pub use extraction_options::{ClientHints, ExtractionOptions, ExtractionRequest};
pub use media_extractor::{ExtractionError, ExtractionResult, MediaExtractor};
pub use search_result::SearchResult;
pub use transcoder::{TranscodeError, Transcoder};
