mod cookie_file_provider;

pub use cookie_file_provider::{CookieFileProvider, DEFAULT_SCRATCH_FILE_NAME};
