//! Configuration loader with environment variable support

use super::Config;
use crate::error::{EmbedServerError, Result};
use config::{Environment, File};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    Ok(cfg)
}

/// Load configuration from a TOML file with environment variable overrides
///
/// Overrides use the `EMBED_SERVER` prefix with `__` as the separator,
/// e.g. `EMBED_SERVER__SERVER__PORT=9000`.
pub fn load_config_with_env<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .add_source(
            Environment::with_prefix("EMBED_SERVER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    Ok(cfg)
}

/// Validate configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    if config.model.name.is_empty() {
        return Err(EmbedServerError::Config(
            "Model name cannot be empty".to_string(),
        ));
    }

    if crate::model::resolve_model(&config.model.name).is_none() {
        return Err(EmbedServerError::Config(format!(
            "Unsupported model '{}' (supported: {})",
            config.model.name,
            crate::model::SUPPORTED_MODELS.join(", ")
        )));
    }

    if config.server.port == 0 {
        return Err(EmbedServerError::Config(
            "Server port must be greater than 0".to_string(),
        ));
    }

    if config.server.max_body_size_kb == 0 {
        return Err(EmbedServerError::Config(
            "Max body size must be greater than 0".to_string(),
        ));
    }

    match config.logging.format.as_str() {
        "json" | "compact" | "pretty" => {}
        other => {
            return Err(EmbedServerError::Config(format!(
                "Unknown log format '{}' (expected json, compact, or pretty)",
                other
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_model_name() {
        let mut config = Config::default();
        config.model.name = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_unknown_model() {
        let mut config = Config::default();
        config.model.name = "word2vec".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("word2vec"));
    }

    #[test]
    fn test_validate_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join(format!(
            "embed-server-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[model]\nname = \"bge-small-en-v1.5\"\n\n[server]\nport = 9100\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.model.name, "bge-small-en-v1.5");
        assert_eq!(config.server.port, 9100);
        // Unspecified sections fall back to defaults
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_validate_bad_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(validate_config(&config).is_err());
    }
}
