use axum::body::Body;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::services::{AudioPayload, Delivery};

impl IntoResponse for AudioPayload {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.data));
        *response.status_mut() = StatusCode::OK;

        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(self.mime_type),
        );

        if let Delivery::Attachment { filename } = &self.delivery {
            if let Ok(value) = HeaderValue::from_str(&content_disposition(filename)) {
                headers.insert(header::CONTENT_DISPOSITION, value);
            }
        }

        response
    }
}

/// `attachment; filename="<name>"`, with non-ASCII names also given in RFC 5987 form.
pub fn content_disposition(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .map(|c| if c.is_ascii() && c != '"' && c != '\\' { c } else { '_' })
        .collect();

    if ascii == filename {
        format!("attachment; filename=\"{}\"", filename)
    } else {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            ascii,
            urlencoding::encode(filename)
        )
    }
}
