use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::ports::{MediaExtractor, Transcoder};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::handlers::query_rejection_response;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    #[serde(default)]
    pub url: String,
    pub id: Option<String>,
    pub title: Option<String>,
}

#[tracing::instrument(skip(state, query))]
pub async fn download_handler<E, T>(
    State(state): State<AppState<E, T>>,
    query: Result<Query<DownloadParams>, QueryRejection>,
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
        "Processing download"
    );

    match state
        .audio_service
        .download(&params.url, params.id.as_deref(), params.title.as_deref())
        .await
    {
        Ok(payload) => {
            tracing::info!(bytes = payload.data.len(), "Sending download");
            payload.into_response()
        }
        Err(e) => e.into_response(),
    }
}
