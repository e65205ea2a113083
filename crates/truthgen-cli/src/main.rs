use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use truthgen_core::config::split_formats;
use truthgen_core::AppConfig;

mod identifiers;
mod pipeline;

#[cfg(test)]
mod tests;

#[derive(Debug, Parser)]
#[command(name = "truthgen")]
#[command(about = "Deterministic Truth Social profile generator (mock data, no network)")]
struct Cli {
    /// Path to the identifiers JSON file.
    #[arg(long, default_value = "data/identifiers.sample.json")]
    input: PathBuf,

    /// Path to the settings JSON file.
    #[arg(long, default_value = "config/settings.example.json")]
    config: PathBuf,

    /// Directory where outputs are written (overrides config).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Comma-separated output formats, e.g. "json,csv" (overrides config).
    #[arg(long)]
    output_formats: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config is loaded before the subscriber exists so its `logging.level`
    // can drive the filter; the outcome is logged right after init.
    let config_result = truthgen_core::load_config(&cli.config);
    let config = match &config_result {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match config_result {
        Ok(_) => tracing::info!(path = %cli.config.display(), "loaded configuration"),
        Err(err) => tracing::warn!(error = %err, "using default configuration"),
    }

    let config = apply_overrides(config, cli.output_dir, cli.output_formats.as_deref());

    pipeline::run(&config, &cli.input)
}

fn apply_overrides(
    mut config: AppConfig,
    output_dir: Option<PathBuf>,
    output_formats: Option<&str>,
) -> AppConfig {
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }
    if let Some(raw) = output_formats {
        let formats = split_formats(raw);
        if !formats.is_empty() {
            config.formats = formats;
        }
    }
    config
}
