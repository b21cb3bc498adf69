pub mod toml_config;

use crate::utils::error::{RaptorError, Result};
use crate::utils::validation::Validate;
use std::path::Path;
use toml_config::AppConfig;

pub const DEFAULT_CONFIG_FILE: &str = "jobraptor.toml";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "jobraptor")]
#[command(about = "Interactive LinkedIn job search with review and CSV export")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Override the scraper endpoint from the config file
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_app_config(&self) -> Result<AppConfig> {
        load_app_config(&self.config, self.endpoint.as_deref())
    }
}

/// Loads and validates the config file. A missing default file is fine,
/// a missing file that was asked for explicitly is not.
pub fn load_app_config(path: &str, endpoint_override: Option<&str>) -> Result<AppConfig> {
    let mut config = if Path::new(path).exists() {
        tracing::debug!("Loading configuration from: {}", path);
        AppConfig::from_file(path)?
    } else if path == DEFAULT_CONFIG_FILE {
        tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
        AppConfig::default()
    } else {
        return Err(RaptorError::ConfigError {
            message: format!("config file '{}' not found", path),
        });
    };

    if let Some(endpoint) = endpoint_override {
        config.scraper.endpoint = endpoint.to_string();
    }

    config.validate()?;
    Ok(config)
}
