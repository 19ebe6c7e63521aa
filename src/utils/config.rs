// Configuration loading for the vcmp CLI

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::utils::error::{Result, VcmpError};

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputFormat,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

/// Configuration parsing and lookup
pub struct ConfigParser;

impl ConfigParser {
    /// Load configuration from an explicit path, or from the default location
    ///
    /// An explicitly named file must exist. The default file is optional and
    /// its absence yields [`Config::default`].
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => match get_default_config_path() {
                Some(path) if path.is_file() => Self::load_from_file(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(VcmpError::Config(
                format!("Configuration file not found: {}", path.display())
            ));
        }

        let content = fs::read_to_string(path)
            .map_err(|source| VcmpError::Io { path: path.to_path_buf(), source })?;

        Self::parse_config(&content)
    }

    pub fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)
            .map_err(|e| VcmpError::Config(format!("Invalid TOML syntax: {}", e)))?;

        if config.log_level.trim().is_empty() {
            return Err(VcmpError::Config("log_level cannot be empty".to_string()));
        }

        EnvFilter::try_new(&config.log_level)
            .map_err(|e| VcmpError::Config(format!("Invalid log_level: {}", e)))?;

        Ok(config)
    }
}

/// `<config_dir>/vcmp/config.toml`, if the platform has a config directory
pub fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vcmp").join("config.toml"))
}
