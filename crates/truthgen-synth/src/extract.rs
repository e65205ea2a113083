//! Username extraction from profile URLs.

const UNKNOWN_USERNAME: &str = "unknown";

/// Extracts the username from a profile URL.
///
/// Total: malformed input degrades to `"unknown"` rather than failing, so
/// synthesis never aborts on an odd URL shape. Profile URLs may carry path
/// segments after the username (e.g. `/posts`); the last-`@` heuristic
/// tolerates both canonical and malformed inputs.
#[must_use]
pub fn extract_username(url: &str) -> String {
    let cleaned = url.trim();
    if cleaned.is_empty() {
        return UNKNOWN_USERNAME.to_string();
    }

    let username = match cleaned.rfind('@') {
        Some(at) => cleaned[at + 1..].split('/').next().unwrap_or(""),
        // Fallback: last non-empty path segment.
        None => cleaned
            .trim_end_matches('/')
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(""),
    };

    if username.is_empty() {
        UNKNOWN_USERNAME.to_string()
    } else {
        username.to_string()
    }
}
