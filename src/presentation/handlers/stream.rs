use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::ports::{MediaExtractor, Transcoder};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::handlers::query_rejection_response;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StreamParams {
    #[serde(default)]
    pub url: String,
    pub id: Option<String>,
}

#[tracing::instrument(skip(state, query))]
pub async fn stream_handler<E, T>(
    State(state): State<AppState<E, T>>,
    query: Result<Query<StreamParams>, QueryRejection>,
) -> Response
where
    E: MediaExtractor + 'static,
    T: Transcoder + 'static,
{
    let Query(params) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection_response(rejection),
    };

    tracing::info!(
        url = %sanitize_for_log(&params.url),
        id = params.id.as_deref().unwrap_or("-"),
        "Processing stream"
    );

    match state
        .audio_service
        .stream(&params.url, params.id.as_deref())
        .await
    {
        Ok(payload) => {
            tracing::info!(bytes = payload.data.len(), mime = payload.mime_type, "Streaming audio");
            payload.into_response()
        }
        Err(e) => e.into_response(),
    }
}
