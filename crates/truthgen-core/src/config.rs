//! Application configuration: documented defaults merged with an optional
//! JSON settings file.
//!
//! The loader is pure (no logging); callers decide how loudly to react to a
//! missing or unreadable file and fall back to [`AppConfig::default`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default base URL embedded in synthesized profile and post URLs.
pub const DEFAULT_BASE_URL: &str = "https://truthsocial.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Recognized export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Parses a format name, case-insensitively. Unknown names yield `None`
    /// so the caller can warn and skip rather than abort.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub output_dir: PathBuf,
    /// Raw requested format names; parsed into [`ExportFormat`] at the
    /// export boundary so unknown names can be warned about individually.
    pub formats: Vec<String>,
    pub max_profiles: usize,
    pub posts_per_profile: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("data"),
            formats: vec!["json".to_string()],
            max_profiles: 100,
            posts_per_profile: 3,
            log_level: "info".to_string(),
        }
    }
}

/// Loads configuration from a JSON settings file merged over the defaults.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file cannot be read or is not valid
/// JSON of the expected shape.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: FileConfig = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(AppConfig::default().merged_with(file))
}

/// Splits a comma-separated formats string into trimmed, non-empty names.
#[must_use]
pub fn split_formats(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// On-disk settings shape. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(alias = "truth_base_url")]
    base_url: Option<String>,
    output: Option<OutputSection>,
    scraper: Option<ScraperSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputSection {
    directory: Option<String>,
    formats: Option<FormatsField>,
}

/// `output.formats` accepts either a JSON array of names or a single
/// comma-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FormatsField {
    List(Vec<String>),
    Joined(String),
}

#[derive(Debug, Default, Deserialize)]
struct ScraperSection {
    max_profiles: Option<usize>,
    posts_per_profile: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingSection {
    level: Option<String>,
}

impl AppConfig {
    fn merged_with(mut self, file: FileConfig) -> Self {
        if let Some(base_url) = file.base_url {
            self.base_url = base_url;
        }
        if let Some(output) = file.output {
            if let Some(directory) = output.directory {
                self.output_dir = PathBuf::from(directory);
            }
            if let Some(formats) = output.formats {
                let names = match formats {
                    FormatsField::List(names) => names,
                    FormatsField::Joined(joined) => split_formats(&joined),
                };
                if !names.is_empty() {
                    self.formats = names;
                }
            }
        }
        if let Some(scraper) = file.scraper {
            if let Some(max_profiles) = scraper.max_profiles {
                self.max_profiles = max_profiles;
            }
            if let Some(posts) = scraper.posts_per_profile {
                self.posts_per_profile = posts;
            }
        }
        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.log_level = level;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse_file_config(json: &str) -> AppConfig {
        let file: FileConfig = serde_json::from_str(json).expect("expected valid config JSON");
        AppConfig::default().merged_with(file)
    }

    #[test]
    fn defaults_are_documented_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.base_url, "https://truthsocial.com");
        assert_eq!(cfg.output_dir, PathBuf::from("data"));
        assert_eq!(cfg.formats, vec!["json"]);
        assert_eq!(cfg.max_profiles, 100);
        assert_eq!(cfg.posts_per_profile, 3);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let cfg = parse_file_config("{}");
        assert_eq!(cfg.formats, vec!["json"]);
        assert_eq!(cfg.max_profiles, 100);
    }

    #[test]
    fn file_overrides_output_section() {
        let cfg = parse_file_config(
            r#"{"output": {"directory": "out", "formats": ["json", "csv"]}}"#,
        );
        assert_eq!(cfg.output_dir, PathBuf::from("out"));
        assert_eq!(cfg.formats, vec!["json", "csv"]);
    }

    #[test]
    fn formats_accepts_comma_separated_string() {
        let cfg = parse_file_config(r#"{"output": {"formats": "json, csv"}}"#);
        assert_eq!(cfg.formats, vec!["json", "csv"]);
    }

    #[test]
    fn empty_formats_list_keeps_default() {
        let cfg = parse_file_config(r#"{"output": {"formats": []}}"#);
        assert_eq!(cfg.formats, vec!["json"]);
    }

    #[test]
    fn scraper_and_logging_sections_override() {
        let cfg = parse_file_config(
            r#"{"scraper": {"max_profiles": 5, "posts_per_profile": 2}, "logging": {"level": "debug"}}"#,
        );
        assert_eq!(cfg.max_profiles, 5);
        assert_eq!(cfg.posts_per_profile, 2);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = parse_file_config(r#"{"scraper": {"mode": "mock"}, "extra": 1}"#);
        assert_eq!(cfg.max_profiles, 100);
    }

    #[test]
    fn truth_base_url_alias_is_accepted() {
        let cfg = parse_file_config(r#"{"truth_base_url": "https://example.test"}"#);
        assert_eq!(cfg.base_url, "https://example.test");
    }

    #[test]
    fn split_formats_trims_and_drops_empties() {
        assert_eq!(split_formats(" json , ,csv,"), vec!["json", "csv"]);
        assert!(split_formats("  ,").is_empty());
    }

    #[test]
    fn export_format_parse_is_case_insensitive() {
        assert_eq!(ExportFormat::parse("JSON"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::parse(" csv "), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::parse("xml"), None);
    }

    #[test]
    fn load_config_missing_file_is_read_error() {
        let result = load_config(Path::new("/nonexistent/settings.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn load_config_reads_settings_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        let mut file = std::fs::File::create(&path).expect("create settings file");
        write!(file, r#"{{"output": {{"directory": "exports"}}}}"#).expect("write settings");

        let cfg = load_config(&path).expect("expected config to load");
        assert_eq!(cfg.output_dir, PathBuf::from("exports"));
    }

    #[test]
    fn load_config_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").expect("write settings");

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
