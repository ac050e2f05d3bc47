use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::AudioServiceError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Malformed query strings get the same JSON error shape as every other failure.
pub fn query_rejection_response(rejection: QueryRejection) -> Response {
    tracing::debug!(error = %rejection.body_text(), "Rejected query string");
    error_response(rejection.status(), rejection.body_text())
}

impl IntoResponse for AudioServiceError {
    fn into_response(self) -> Response {
        if self.is_invalid_request() {
            tracing::debug!(error = %self, "Rejected request");
            return error_response(StatusCode::BAD_REQUEST, self.to_string());
        }

        tracing::error!(error = ?self, "Request failed");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
    }
}
