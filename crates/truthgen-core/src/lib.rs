pub mod config;
pub mod profile;
pub mod time;

pub use config::{load_config, AppConfig, ConfigError, ExportFormat};
pub use profile::{MediaAttachment, Post, Profile};
