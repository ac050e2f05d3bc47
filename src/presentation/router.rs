use std::path::Path;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{MediaExtractor, Transcoder};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    download_handler, health_handler, search_handler, stream_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<E, T>(state: AppState<E, T>, index_file: &Path) -> Router
where
    E: MediaExtractor + 'static,
    T: Transcoder + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route_service("/", ServeFile::new(index_file))
        .route("/health", get(health_handler))
        .route("/api/search", get(search_handler::<E, T>))
        .route("/api/stream", get(stream_handler::<E, T>))
        .route("/api/download", get(download_handler::<E, T>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
