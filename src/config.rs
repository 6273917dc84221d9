use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::utils;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Process-wide settings, read once at startup and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Absolute API base URL, e.g. `https://api.example.com/`.
    #[serde(default = "default_server_api_base")]
    pub server_api_base: String,
    /// Log file location; `~` is expanded. Defaults to the profile's data dir.
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default = "default_config_version")]
    pub config_version: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_api_base: default_server_api_base(),
            log_file: None,
            config_version: Some(CURRENT_CONFIG_VERSION),
        }
    }
}

fn default_server_api_base() -> String {
    "http://127.0.0.1:9090/api/".to_string()
}

fn default_config_version() -> Option<u32> {
    Some(CURRENT_CONFIG_VERSION)
}

/// A config read from disk, and whether it had to be created first
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
    /// The file was missing and a default one was written
    pub created: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to write config file: {0}")]
    WriteError(String),
}

impl Config {
    /// Open the profile's config file, creating a default one if missing
    pub fn open_with_profile(profile: utils::Profile) -> Result<LoadedConfig, ConfigError> {
        let config_path = Self::get_config_path(profile)?;
        Self::open(&config_path)
    }

    /// Open an explicit config file.
    /// A missing file is created with default values.
    pub fn open(path: &Path) -> Result<LoadedConfig, ConfigError> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .map_err(|e| ConfigError::ReadError(e.to_string()))?;
            let config: Config = toml::from_str(&contents)?;
            Ok(LoadedConfig {
                config,
                path: path.to_path_buf(),
                created: false,
            })
        } else {
            let mut config = Config::default();
            config.save_to_path(path)?;
            Ok(LoadedConfig {
                config,
                path: path.to_path_buf(),
                created: true,
            })
        }
    }

    pub fn save_to_path(&mut self, path: &Path) -> Result<(), ConfigError> {
        // Ensure config version is set before saving
        self.config_version = Some(CURRENT_CONFIG_VERSION);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::WriteError(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path(profile: utils::Profile) -> Result<PathBuf, ConfigError> {
        let config_dir = utils::get_config_dir(profile)
            .ok_or_else(|| ConfigError::ConfigDirError("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("config.toml"))
    }

    /// Resolve the log file path: the configured one, else `<data dir>/fame.log`
    pub fn get_log_path(&self, profile: utils::Profile) -> Option<PathBuf> {
        match self.log_file {
            Some(ref path) => Some(utils::expand_path(path)),
            None => utils::get_data_dir(profile).map(|dir| dir.join("fame.log")),
        }
    }
}
