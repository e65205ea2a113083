//! Classification of raw input identifiers into canonical `(value, kind)`
//! pairs.

use crate::error::SynthError;

/// The synthesis branch an identifier routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// `http://` or `https://` prefixed; the value is kept verbatim and the
    /// username is extracted downstream.
    Url,
    /// `#` prefixed; the marker is retained on the canonical value.
    Tag,
    /// Everything else; a single leading `@` is stripped.
    Username,
}

/// Normalizes a raw identifier.
///
/// The value is trimmed of surrounding whitespace before classification.
/// Only the first `@` of a username is stripped; `@@bob` normalizes to
/// `@bob`.
///
/// # Errors
///
/// Returns [`SynthError::InvalidIdentifier`] when the trimmed input is
/// empty.
pub fn normalize(raw: &str) -> Result<(String, IdentifierKind), SynthError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(SynthError::InvalidIdentifier);
    }

    if value.starts_with("http://") || value.starts_with("https://") {
        return Ok((value.to_string(), IdentifierKind::Url));
    }

    if value.starts_with('#') {
        return Ok((value.to_string(), IdentifierKind::Tag));
    }

    let username = value.strip_prefix('@').unwrap_or(value);
    Ok((username.to_string(), IdentifierKind::Username))
}
