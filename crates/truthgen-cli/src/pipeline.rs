//! End-to-end run orchestration: identifiers in, export files out.
//!
//! Per-identifier failures are recovered by skipping; structural failures
//! (unreadable input, nothing to build or export) abort the run.

use std::path::Path;

use truthgen_core::{AppConfig, ExportFormat, Profile};
use truthgen_synth::{normalize, Synthesizer};

use crate::identifiers::load_identifiers;

/// Runs a full generation pass and writes the requested export files.
///
/// # Errors
///
/// Fails when the identifiers file cannot be loaded, no profiles can be
/// built, or an export sink fails.
pub fn run(config: &AppConfig, input: &Path) -> anyhow::Result<()> {
    let identifiers = load_identifiers(input)?;

    let profiles = build_profiles(&identifiers, config);
    if profiles.is_empty() {
        anyhow::bail!("no profiles could be built from the provided identifiers");
    }
    tracing::info!(profiles = profiles.len(), "built profile payloads");

    let formats = resolve_formats(&config.formats);
    truthgen_export::export_profiles(&profiles, &config.output_dir, &formats)?;

    tracing::info!(output_dir = %config.output_dir.display(), "run completed");
    Ok(())
}

/// Builds one profile per identifier, in input order, capped at
/// `max_profiles`. Invalid identifiers are warned about and skipped.
fn build_profiles(identifiers: &[String], config: &AppConfig) -> Vec<Profile> {
    let synthesizer = Synthesizer::new(config.base_url.clone(), config.posts_per_profile);

    let mut profiles = Vec::new();
    for (index, raw) in identifiers.iter().enumerate() {
        if index >= config.max_profiles {
            tracing::info!(
                max_profiles = config.max_profiles,
                "profile limit reached, skipping remaining identifiers"
            );
            break;
        }

        let (value, kind) = match normalize(raw) {
            Ok(pair) => pair,
            Err(err) => {
                tracing::warn!(identifier = %raw, error = %err, "skipping invalid identifier");
                continue;
            }
        };

        tracing::info!(identifier = %value, kind = ?kind, "processing identifier");
        profiles.push(synthesizer.build_profile(&value, kind));
    }
    profiles
}

/// Parses requested format names, deduplicating and warning about unknown
/// ones (which are skipped, not fatal).
fn resolve_formats(names: &[String]) -> Vec<ExportFormat> {
    let mut formats = Vec::new();
    for name in names {
        match ExportFormat::parse(name) {
            Some(format) if !formats.contains(&format) => formats.push(format),
            Some(_) => {}
            None => {
                tracing::warn!(format = %name, "unsupported export format requested and ignored");
            }
        }
    }
    formats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_max(max_profiles: usize) -> AppConfig {
        AppConfig {
            max_profiles,
            ..AppConfig::default()
        }
    }

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn builds_one_profile_per_identifier() {
        let profiles = build_profiles(&owned(&["@bob", "#news"]), &config_with_max(100));
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].username, "bob");
        assert_eq!(profiles[1].username, "news_stream");
    }

    #[test]
    fn invalid_identifiers_are_skipped() {
        let profiles = build_profiles(&owned(&["   ", "alice"]), &config_with_max(100));
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].username, "alice");
    }

    #[test]
    fn max_profiles_caps_the_run() {
        let profiles = build_profiles(&owned(&["a", "b", "c"]), &config_with_max(2));
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[1].username, "b");
    }

    #[test]
    fn all_invalid_yields_empty_list() {
        let profiles = build_profiles(&owned(&["", "  "]), &config_with_max(100));
        assert!(profiles.is_empty());
    }

    #[test]
    fn resolve_formats_keeps_recognized_names() {
        let formats = resolve_formats(&owned(&["json", "csv"]));
        assert_eq!(formats, vec![ExportFormat::Json, ExportFormat::Csv]);
    }

    #[test]
    fn resolve_formats_skips_unknown_and_dedups() {
        let formats = resolve_formats(&owned(&["xml", "json", "JSON"]));
        assert_eq!(formats, vec![ExportFormat::Json]);
    }

    #[test]
    fn run_fails_on_missing_input() {
        let config = AppConfig::default();
        assert!(run(&config, Path::new("/nonexistent/identifiers.json")).is_err());
    }

    #[test]
    fn run_writes_requested_outputs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("identifiers.json");
        std::fs::write(&input, r##"["@bob", "#news"]"##).expect("write input");

        let config = AppConfig {
            output_dir: dir.path().join("out"),
            formats: owned(&["json", "csv"]),
            ..AppConfig::default()
        };

        run(&config, &input).expect("run failed");

        assert!(config.output_dir.join(truthgen_export::JSON_FILE_NAME).exists());
        assert!(config.output_dir.join(truthgen_export::CSV_FILE_NAME).exists());
    }
}
