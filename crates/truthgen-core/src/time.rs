//! Timestamp formatting shared by synthesis and export.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a UTC timestamp as ISO-8601 with microsecond precision and a
/// literal `Z` suffix, e.g. `2026-08-26T12:34:56.789012Z`.
#[must_use]
pub fn iso_utc(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current UTC time in the canonical export format.
#[must_use]
pub fn iso_utc_now() -> String {
    iso_utc(Utc::now())
}
