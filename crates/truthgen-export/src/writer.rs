//! JSON and CSV export sinks.
//!
//! Each sink opens, writes, and releases its destination file within a
//! single call; nothing is held across exports.

use std::fs::File;
use std::path::Path;

use truthgen_core::{ExportFormat, Profile};

use crate::error::ExportError;
use crate::flatten::flatten;

pub const JSON_FILE_NAME: &str = "truth_social_profiles.json";
pub const CSV_FILE_NAME: &str = "truth_social_profiles.csv";

/// Exports `profiles` to every requested format under `output_dir`.
///
/// Unknown format names are filtered out before this point; an empty
/// profile list writes nothing and logs a warning.
///
/// # Errors
///
/// Returns [`ExportError`] when the output directory or a destination file
/// cannot be written.
pub fn export_profiles(
    profiles: &[Profile],
    output_dir: &Path,
    formats: &[ExportFormat],
) -> Result<(), ExportError> {
    if profiles.is_empty() {
        tracing::warn!("no profiles provided to export");
        return Ok(());
    }

    std::fs::create_dir_all(output_dir).map_err(|source| ExportError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    if formats.contains(&ExportFormat::Json) {
        export_json(profiles, &output_dir.join(JSON_FILE_NAME))?;
    }
    if formats.contains(&ExportFormat::Csv) {
        export_csv(profiles, &output_dir.join(CSV_FILE_NAME))?;
    }

    Ok(())
}

/// Writes the profile list as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`ExportError::Io`] or [`ExportError::Json`] on failure.
pub fn export_json(profiles: &[Profile], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(file, profiles).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(profiles = profiles.len(), path = %path.display(), "wrote JSON output");
    Ok(())
}

/// Writes the flattened rows as CSV with a header derived from the row
/// field order. With zero rows no file is written and a warning is logged.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] or [`ExportError::Io`] on failure.
pub fn export_csv(profiles: &[Profile], path: &Path) -> Result<(), ExportError> {
    let rows = flatten(profiles);
    if rows.is_empty() {
        tracing::warn!(path = %path.display(), "no rows to export to CSV");
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path).map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    for row in &rows {
        writer.serialize(row).map_err(|source| ExportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(rows = rows.len(), path = %path.display(), "wrote CSV output");
    Ok(())
}
