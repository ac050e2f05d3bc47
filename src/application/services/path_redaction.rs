use std::path::Path;

pub const REDACTED_PATH: &str = "[path]";

const WRAPPING: &[char] = &['\'', '"', '(', ')', '<', '>', ',', ';', ':', '`'];

/// Replaces filesystem paths in an engine message before it reaches a client.
///
/// A whitespace-separated token counts as a path when, stripped of quotes and
/// brackets, it is absolute, home-relative, or mentions `scratch_root`.
pub fn redact_paths(message: &str, scratch_root: &Path) -> String {
    let root = scratch_root.display().to_string();
    message
        .split(' ')
        .map(|token| redact_token(token, &root))
        .collect::<Vec<_>>()
        .join(" ")
}

fn redact_token(token: &str, root: &str) -> String {
    let inner = token.trim_matches(WRAPPING);
    if inner.is_empty() || !looks_like_path(inner, root) {
        return token.to_string();
    }
    token.replacen(inner, REDACTED_PATH, 1)
}

fn looks_like_path(candidate: &str, root: &str) -> bool {
    candidate.starts_with('/')
        || candidate.starts_with("~/")
        || is_drive_path(candidate)
        || (!root.is_empty() && candidate.contains(root))
}

fn is_drive_path(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    bytes.len() > 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'\\'
}
