use std::path::PathBuf;

use super::*;

#[test]
fn defaults_when_no_flags() {
    let cli = Cli::try_parse_from(["truthgen"]).expect("expected valid cli args");
    assert_eq!(cli.input, PathBuf::from("data/identifiers.sample.json"));
    assert_eq!(cli.config, PathBuf::from("config/settings.example.json"));
    assert!(cli.output_dir.is_none());
    assert!(cli.output_formats.is_none());
}

#[test]
fn parses_input_and_config_paths() {
    let cli = Cli::try_parse_from([
        "truthgen",
        "--input",
        "ids.json",
        "--config",
        "settings.json",
    ])
    .expect("expected valid cli args");
    assert_eq!(cli.input, PathBuf::from("ids.json"));
    assert_eq!(cli.config, PathBuf::from("settings.json"));
}

#[test]
fn parses_output_overrides() {
    let cli = Cli::try_parse_from([
        "truthgen",
        "--output-dir",
        "out",
        "--output-formats",
        "json,csv",
    ])
    .expect("expected valid cli args");
    assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
    assert_eq!(cli.output_formats.as_deref(), Some("json,csv"));
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["truthgen", "--bogus"]).is_err());
}

#[test]
fn apply_overrides_replaces_dir_and_formats() {
    let config = apply_overrides(
        truthgen_core::AppConfig::default(),
        Some(PathBuf::from("exports")),
        Some("csv"),
    );
    assert_eq!(config.output_dir, PathBuf::from("exports"));
    assert_eq!(config.formats, vec!["csv"]);
}

#[test]
fn apply_overrides_keeps_config_when_formats_blank() {
    let config = apply_overrides(truthgen_core::AppConfig::default(), None, Some("  ,"));
    assert_eq!(config.output_dir, PathBuf::from("data"));
    assert_eq!(config.formats, vec!["json"]);
}
