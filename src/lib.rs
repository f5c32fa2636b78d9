//! Embed Server - text-to-embedding HTTP microservice
//!
//! A single-purpose service: load a pretrained sentence-embedding model once
//! at startup, then serve `POST /embed` requests that map a text string to a
//! fixed-length vector, plus a `GET /health` liveness probe.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use embed_server::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!
//!     // Load the model once; all requests share the handle
//!     let embedder = Arc::new(LocalEmbedder::load(&config.model)?);
//!
//!     let state = AppState {
//!         embedder,
//!         metrics: Arc::new(MetricsCollector::new()),
//!     };
//!
//!     embed_server::server::start_server(&config.server, state).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod observability;
pub mod server;

pub use config::Config;
pub use error::{EmbedServerError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::api::{build_router, AppState};
    pub use crate::config::Config;
    pub use crate::error::{EmbedServerError, Result};
    pub use crate::model::{Embedder, LocalEmbedder};
    pub use crate::observability::MetricsCollector;
}
