use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::{MediaExtractor, SearchResult, Transcoder};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::handlers::query_rejection_response;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResultDto>,
}

#[derive(Serialize)]
pub struct SearchResultDto {
    pub id: String,
    pub title: String,
    pub uploader: String,
    pub duration: u64,
    pub thumbnail: String,
    pub webpage_url: String,
    pub view_count: u64,
}

impl From<SearchResult> for SearchResultDto {
    fn from(result: SearchResult) -> Self {
        Self {
            id: result.id,
            title: result.title,
            uploader: result.uploader,
            duration: result.duration_seconds,
            thumbnail: result.thumbnail,
            webpage_url: result.webpage_url,
            view_count: result.view_count,
        }
    }
}

#[tracing::instrument(skip(state, query))]
pub async fn search_handler<E, T>(
    State(state): State<AppState<E, T>>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Response
where
    E: MediaExtractor + 'static,
    T: Transcoder + 'static,
{
    let Query(params) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection_response(rejection),
    };

    tracing::debug!(query = %sanitize_for_log(&params.q), "Processing search");

    match state.audio_service.search(&params.q).await {
        Ok(results) => (
            StatusCode::OK,
            Json(SearchResponse {
                results: results.into_iter().map(SearchResultDto::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
