const MAX_VISIBLE_LENGTH: usize = 120;

const SECRET_PARAMS: [&str; 6] = ["token=", "key=", "sig=", "signature=", "auth=", "cookie="];

/// Shortens user-supplied queries and URLs and masks secret-looking parameters before logging.
pub fn sanitize_for_log(input: &str) -> String {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = redact_secret_params(trimmed);
    let char_count = redacted.chars().count();
    if char_count > MAX_VISIBLE_LENGTH {
        let visible: String = redacted.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", visible, char_count)
    } else {
        redacted
    }
}

fn redact_secret_params(text: &str) -> String {
    let mut result = text.to_string();
    for param in SECRET_PARAMS {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].to_ascii_lowercase().find(param) {
            let value_start = search_from + found + param.len();
            let value_end = result[value_start..]
                .find(|c: char| c == '&' || c == '#' || c.is_whitespace())
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(value_start..value_end, "[REDACTED]");
            search_from = value_start + "[REDACTED]".len();
        }
    }
    result
}
