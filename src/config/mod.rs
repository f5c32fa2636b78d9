//! Configuration management for the embedding server

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod loader;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration for the embedding model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model name (e.g. "all-MiniLM-L6-v2")
    #[serde(default = "default_model_name")]
    pub name: String,

    /// Directory where downloaded model weights are cached
    pub cache_dir: Option<String>,

    /// Show a progress bar while downloading weights
    #[serde(default)]
    pub show_download_progress: bool,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_server_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_server_port")]
    pub port: u16,

    /// Maximum request body size in KB
    #[serde(default = "default_max_body_size")]
    pub max_body_size_kb: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "json", "compact", or "pretty"
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_model_name() -> String { "all-MiniLM-L6-v2".to_string() }
fn default_server_host() -> String { "0.0.0.0".to_string() }
fn default_server_port() -> u16 { 8000 }
fn default_max_body_size() -> usize { 256 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
            cache_dir: None,
            show_download_progress: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            max_body_size_kb: default_max_body_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let config = loader::load_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn from_file_with_env<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let config = loader::load_config_with_env(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate this configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        loader::validate_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.model.name, "all-MiniLM-L6-v2");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"server": {"port": 9000}}"#).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.model.name, "all-MiniLM-L6-v2");
        assert_eq!(config.logging.level, "info");
    }
}
