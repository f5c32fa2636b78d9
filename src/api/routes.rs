//! API route configuration

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{self, AppState};

/// Build the API router
pub fn build_router(state: AppState, max_body_size: usize) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(handlers::health))
        .route("/metrics", get(metrics_handler))
        .route("/embed", post(handlers::embed))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root handler
async fn root_handler(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    use axum::Json;
    Json(serde_json::json!({
        "service": "Embed Server",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.embedder.model_name(),
        "status": "running"
    }))
}

/// Metrics handler (Prometheus text format)
async fn metrics_handler(State(state): State<AppState>) -> String {
    state.metrics.export_prometheus()
}
