//! Error types for the embedding server

use thiserror::Error;

/// Result type alias for embedding server operations
pub type Result<T> = std::result::Result<T, EmbedServerError>;

/// Main error type for the embedding server
#[derive(Error, Debug)]
pub enum EmbedServerError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors related to model loading and inference
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to load model '{name}': {reason}")]
    Load { name: String, reason: String },

    #[error("Unsupported model: {0}")]
    Unsupported(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

impl From<config::ConfigError> for EmbedServerError {
    fn from(err: config::ConfigError) -> Self {
        EmbedServerError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EmbedServerError::Config("missing model name".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing model name");

        let err: EmbedServerError = ModelError::Unsupported("word2vec".to_string()).into();
        assert!(err.to_string().contains("word2vec"));
    }

    #[test]
    fn test_model_load_error_names_model() {
        let err = ModelError::Load {
            name: "all-MiniLM-L6-v2".to_string(),
            reason: "weights not found".to_string(),
        };
        assert!(err.to_string().contains("all-MiniLM-L6-v2"));
        assert!(err.to_string().contains("weights not found"));
    }
}
