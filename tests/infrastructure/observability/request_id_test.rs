use axum::http::HeaderValue;

use audiograb::infrastructure::observability::{REQUEST_ID_HEADER, RequestId, request_id_from_header};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_request_id_when_cloned_then_equals_original() {
    let original = RequestId("abc".to_string());
    let cloned = original.clone();
    assert_eq!(original, cloned);
}

#[test]
fn given_valid_header_when_reading_then_reuses_caller_value() {
    let value = HeaderValue::from_static("  trace-123  ");
    let request_id = request_id_from_header(Some(&value));
    assert_eq!(request_id.as_str(), "trace-123");
}

#[test]
fn given_missing_header_when_reading_then_generates_uuid() {
    let request_id = request_id_from_header(None);
    assert_eq!(request_id.as_str().len(), 36);
}

#[test]
fn given_oversized_header_when_reading_then_generates_new_id() {
    let long = "a".repeat(200);
    let value = HeaderValue::from_str(&long).unwrap();
    let request_id = request_id_from_header(Some(&value));
    assert_ne!(request_id.as_str(), long);
}

#[test]
fn given_header_with_spaces_inside_when_reading_then_generates_new_id() {
    let value = HeaderValue::from_static("two words");
    let request_id = request_id_from_header(Some(&value));
    assert_ne!(request_id.as_str(), "two words");
}
