//! API request handlers

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::error;

use crate::model::Embedder;
use crate::observability::MetricsCollector;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub embedder: Arc<dyn Embedder>,
    pub metrics: Arc<MetricsCollector>,
}

/// Request to embed a text
#[derive(Debug, Deserialize)]
pub struct EmbedRequest {
    /// Text to embed. Missing or null is treated as the empty string.
    #[serde(default)]
    pub text: Option<String>,
}

/// Response carrying the embedding vector
#[derive(Debug, Serialize)]
pub struct EmbedResponse {
    pub embedding: Vec<f32>,
    pub model: String,
}

/// Generic error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// JSON extractor that answers 422 for every malformed body.
///
/// axum's stock `Json` splits rejections between 400 (syntax) and 422
/// (schema); this service promises 422 for any body that does not match
/// the request schema.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidatedJson(value)),
            Err(rejection) => Err(validation_error(rejection)),
        }
    }
}

fn validation_error(rejection: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: rejection.body_text(),
        }),
    )
}

/// Compute the embedding for a text
pub async fn embed(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<EmbedRequest>,
) -> impl IntoResponse {
    let started = Instant::now();

    // Missing/null text degrades to the empty string, which still embeds
    let text = req.text.unwrap_or_default();
    let text = text.trim();

    match state.embedder.embed(text).await {
        Ok(embedding) => {
            state.metrics.record_embedding_latency(started.elapsed());
            state.metrics.record_request(started.elapsed());
            (
                StatusCode::OK,
                Json(EmbedResponse {
                    embedding,
                    model: state.embedder.model_name().to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            state.metrics.record_error();
            error!("Embedding failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Liveness probe. No dependency checks, alive means reachable.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"ok": true})))
}
