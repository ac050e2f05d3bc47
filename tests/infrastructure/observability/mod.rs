mod log_sanitizer_test;
mod request_id_test;
