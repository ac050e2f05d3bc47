mod download;
mod error;
mod health;
mod media_response;
mod search;
mod stream;

pub use download::download_handler;
pub use error::{ErrorResponse, error_response, query_rejection_response};
pub use health::health_handler;
pub use media_response::content_disposition;
pub use search::search_handler;
pub use stream::stream_handler;
