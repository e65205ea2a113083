//! Minimal HTML tag removal for tabular export.

/// Removes angle-bracket tags from a snippet.
///
/// A `<` starts discarding characters until the next `>`; everything outside
/// that toggle is kept, and the result is trimmed. Not a sanitizer: entities
/// are left as-is and malformed markup is handled only by the simple
/// open/close toggle.
#[must_use]
pub fn strip_tags(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut inside_tag = false;

    for ch in value.chars() {
        match ch {
            '<' => inside_tag = true,
            '>' => inside_tag = false,
            _ if inside_tag => {}
            _ => out.push(ch),
        }
    }

    out.trim().to_string()
}
