const DEFAULT_FILENAME: &str = "audio";

/// Keeps alphanumerics, spaces, hyphens and underscores, then trims trailing whitespace.
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    kept.trim_end().to_string()
}

/// Builds the attachment filename for a download.
///
/// Falls back to the sanitized identifier and then to `"audio"` when the
/// title sanitizes to nothing.
pub fn attachment_filename(title: Option<&str>, id: Option<&str>, extension: &str) -> String {
    let base = [title, id]
        .into_iter()
        .flatten()
        .map(sanitize_title)
        .find(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

    format!("{}.{}", base, extension.trim_start_matches('.'))
}
