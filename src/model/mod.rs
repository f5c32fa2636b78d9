//! Embedding model loading and inference
//!
//! The model is loaded once at process startup and shared read-only for the
//! process lifetime. Handlers only see the [`Embedder`] trait, so tests can
//! substitute a stub without touching model weights.

pub mod local;

pub use local::LocalEmbedder;

use crate::error::Result;
use async_trait::async_trait;
use fastembed::EmbeddingModel;

/// Model names accepted in configuration
pub const SUPPORTED_MODELS: &[&str] = &[
    "all-MiniLM-L6-v2",
    "all-MiniLM-L12-v2",
    "bge-small-en-v1.5",
];

/// Trait for embedding providers
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding for a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Get the dimension of embeddings
    fn dimension(&self) -> usize;

    /// Name of the loaded model
    fn model_name(&self) -> &str;
}

/// Map a configured model name onto a fastembed model variant
pub fn resolve_model(name: &str) -> Option<EmbeddingModel> {
    match name {
        "all-MiniLM-L6-v2" => Some(EmbeddingModel::AllMiniLML6V2),
        "all-MiniLM-L12-v2" => Some(EmbeddingModel::AllMiniLML12V2),
        "bge-small-en-v1.5" => Some(EmbeddingModel::BGESmallENV15),
        _ => None,
    }
}
