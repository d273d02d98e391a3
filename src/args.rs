//! Command-line interface.
//!
//! Flags override values from the config file; the merged config is
//! validated again afterwards.

use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::config::{Config, ConfigError, DetailsMode};
use crate::country::CountryCode;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "country-picker",
    version,
    about = "Pick a country and browse its details"
)]
pub struct Args {
    /// Path to the config file (default: ~/.config/country-picker/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Country selected at startup (CA or CO)
    #[arg(long, value_name = "CODE")]
    pub country: Option<CountryCode>,

    /// Override the lookup endpoint base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Only show the selected code, never fetch details
    #[arg(long)]
    pub no_fetch: bool,

    /// Write logs to this file instead of the cache directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply flag overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(country) = self.country {
            config.details.default_country = country;
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if self.no_fetch {
            config.details.mode = DetailsMode::Echo;
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}

/// Load the config file, apply CLI overrides and validate the result.
///
/// An explicit `--config` path must exist; the default path may be absent.
pub fn load_config(args: &Args) -> Result<Config, ConfigError> {
    let path = args.config_path();
    if args.config.is_some() && !path.exists() {
        return Err(ConfigError::ReadError {
            path,
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        });
    }

    let mut config = Config::load_from(&path)?;
    args.apply(&mut config);
    config.validate()?;
    Ok(config)
}
