use audiograb::infrastructure::observability::sanitize_for_log;

#[test]
fn given_empty_input_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_for_log("   "), "[EMPTY]");
}

#[test]
fn given_short_query_when_sanitizing_then_returns_unchanged() {
    assert_eq!(sanitize_for_log("lofi beats"), "lofi beats");
}

#[test]
fn given_long_input_when_sanitizing_then_truncates_with_length() {
    let input = "x".repeat(300);
    let result = sanitize_for_log(&input);
    assert!(result.starts_with(&"x".repeat(120)));
    assert!(result.ends_with("(300 chars total)"));
}

#[test]
fn given_url_with_signature_when_sanitizing_then_redacts_value() {
    let result = sanitize_for_log("https://cdn.example.com/a?sig=SECRET123&itag=140");
    assert!(!result.contains("SECRET123"));
    assert!(result.contains("sig=[REDACTED]&itag=140"));
}

#[test]
fn given_uppercase_param_when_sanitizing_then_still_redacts() {
    let result = sanitize_for_log("https://example.com/?Token=abc");
    assert_eq!(result, "https://example.com/?Token=[REDACTED]");
}

#[test]
fn given_multibyte_input_when_truncating_then_does_not_split_characters() {
    let input = "é".repeat(150);
    let result = sanitize_for_log(&input);
    assert!(result.starts_with(&"é".repeat(120)));
}
