//! Embed Server Binary
//!
//! Entry point for running the embedding service. Loads configuration,
//! initializes logging and metrics, loads the model, and serves HTTP until
//! shutdown.

use embed_server::{
    api::AppState,
    config::Config,
    model::{Embedder, LocalEmbedder},
    observability::{init_observability, MetricsCollector},
    server::start_server,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Optional config file; defaults reproduce the stock setup
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let config = if std::path::Path::new(&config_path).exists() {
        Config::from_file_with_env(&config_path)?
    } else {
        let config = Config::default();
        config.validate()?;
        config
    };

    init_observability(&config.logging.level, &config.logging.format);

    info!("Starting Embed Server");
    info!("Model: {}", config.model.name);

    let metrics = Arc::new(MetricsCollector::new());

    // Model load is blocking (weights download + ONNX session init), so it
    // runs off the async runtime. A load failure aborts startup.
    let model_config = config.model.clone();
    let embedder = tokio::task::spawn_blocking(move || LocalEmbedder::load(&model_config))
        .await??;
    info!("Embedding model ready ({} dimensions)", embedder.dimension());

    let state = AppState {
        embedder: Arc::new(embedder),
        metrics,
    };

    start_server(&config.server, state).await?;

    Ok(())
}
