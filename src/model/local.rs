//! Local embedding model backed by fastembed

use super::{resolve_model, Embedder};
use crate::config::ModelConfig;
use crate::error::{ModelError, Result};
use async_trait::async_trait;
use fastembed::{InitOptions, TextEmbedding};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Embedder that runs a sentence-transformer model in-process.
///
/// Loading pulls the ONNX weights into memory (downloading them into the
/// cache directory on first use) and keeps them for the process lifetime.
/// Inference is synchronous and CPU-bound, so calls are dispatched to the
/// blocking thread pool.
pub struct LocalEmbedder {
    model: Arc<TextEmbedding>,
    name: String,
    dimension: usize,
}

impl std::fmt::Debug for LocalEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `TextEmbedding` has no Debug impl, so the model handle is elided
        f.debug_struct("LocalEmbedder")
            .field("name", &self.name)
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

impl LocalEmbedder {
    /// Load the configured model. Blocks until the weights are in memory.
    ///
    /// Fails if the model name is unknown or the weights cannot be loaded;
    /// the caller is expected to abort startup in that case.
    pub fn load(config: &ModelConfig) -> Result<Self> {
        let model_kind = resolve_model(&config.name)
            .ok_or_else(|| ModelError::Unsupported(config.name.clone()))?;

        let mut options = InitOptions::new(model_kind)
            .with_show_download_progress(config.show_download_progress);
        if let Some(dir) = &config.cache_dir {
            options = options.with_cache_dir(PathBuf::from(dir));
        }

        let model = TextEmbedding::try_new(options).map_err(|e| ModelError::Load {
            name: config.name.clone(),
            reason: e.to_string(),
        })?;

        // Probe inference: validates the model end-to-end and reports the
        // embedding dimension it actually produces.
        let probe = model.embed(vec![""], None).map_err(|e| ModelError::Load {
            name: config.name.clone(),
            reason: format!("probe inference failed: {}", e),
        })?;
        let dimension = probe
            .into_iter()
            .next()
            .map(|v| v.len())
            .filter(|d| *d > 0)
            .ok_or_else(|| ModelError::Load {
                name: config.name.clone(),
                reason: "probe inference returned no embedding".to_string(),
            })?;

        info!(model = %config.name, dimension, "Embedding model loaded");

        Ok(Self {
            model: Arc::new(model),
            name: config.name.clone(),
            dimension,
        })
    }
}

#[async_trait]
impl Embedder for LocalEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let model = Arc::clone(&self.model);
        let text = text.to_owned();

        let embeddings = tokio::task::spawn_blocking(move || model.embed(vec![text], None))
            .await
            .map_err(|e| ModelError::Inference(format!("inference task failed: {}", e)))?
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::Inference("model returned no embedding".to_string()).into())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rejects_unknown_model() {
        let config = ModelConfig {
            name: "word2vec".to_string(),
            ..ModelConfig::default()
        };
        let err = LocalEmbedder::load(&config).unwrap_err();
        assert!(err.to_string().contains("Unsupported model"));
    }

    // Downloads model weights on first run
    #[tokio::test]
    #[ignore]
    async fn test_load_and_embed_real_model() {
        let config = ModelConfig::default();
        let embedder = LocalEmbedder::load(&config).expect("model should load");

        assert_eq!(embedder.model_name(), "all-MiniLM-L6-v2");
        assert_eq!(embedder.dimension(), 384);

        let vector = embedder.embed("hello world").await.expect("embed");
        assert_eq!(vector.len(), 384);

        // Empty input still embeds to a full-size vector
        let empty = embedder.embed("").await.expect("embed empty");
        assert_eq!(empty.len(), 384);
    }
}
