//! HTTP trigger surface for the pipeline stages
//!
//! One GET endpoint per stage, mirroring the shape an external orchestrator
//! drives: `/split?key=..&n=..`, `/map?key=..`, `/reduce?keys=a,b,c`. The
//! server holds no pipeline state of its own; every request is a single
//! stage invocation against the shared object store.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::error::PipelineError;
use crate::pipeline::stages::{self, MapRequest, ReduceRequest, SplitRequest};
use crate::storage::ObjectStore;

/// Chunk count used when `/split` is called without `n`
const DEFAULT_CHUNK_COUNT: usize = 3;

#[derive(Clone)]
struct AppState {
    store: Arc<dyn ObjectStore>,
}

/// Build the stage-trigger router around a store
pub fn router(store: Arc<dyn ObjectStore>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/split", get(handle_split))
        .route("/map", get(handle_map))
        .route("/reduce", get(handle_reduce))
        .layer(CorsLayer::permissive())
        .with_state(AppState { store })
}

/// Serve the stage endpoints until the process is stopped
pub async fn serve(store: Arc<dyn ObjectStore>, port: u16) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    info!("starting pipeline server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(store)).await?;

    Ok(())
}

/// Pipeline error carried out of a handler
struct ApiError(PipelineError);

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PipelineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PipelineError::NotFound(_) => StatusCode::NOT_FOUND,
            PipelineError::Decode { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            PipelineError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            PipelineError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!("request failed: {}", self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

#[derive(Debug, Deserialize)]
struct SplitQuery {
    key: Option<String>,
    n: Option<usize>,
}

async fn handle_split(
    State(state): State<AppState>,
    Query(params): Query<SplitQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let document_key = params
        .key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| PipelineError::invalid_input("missing 'key' parameter"))?;

    let request = SplitRequest {
        document_key,
        chunk_count: params.n.unwrap_or(DEFAULT_CHUNK_COUNT),
    };
    let response = stages::split(state.store.as_ref(), &request).await?;

    Ok(Json(json!({
        "message": "split complete",
        "chunk_keys": response.chunk_keys,
    })))
}

#[derive(Debug, Deserialize)]
struct MapQuery {
    key: Option<String>,
}

async fn handle_map(
    State(state): State<AppState>,
    Query(params): Query<MapQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let chunk_key = params
        .key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| PipelineError::invalid_input("missing 'key' parameter"))?;

    let response = stages::map(state.store.as_ref(), &MapRequest { chunk_key }).await?;

    Ok(Json(json!({
        "message": "map complete",
        "result_key": response.result_key,
        "word_count": response.distinct_words,
    })))
}

#[derive(Debug, Deserialize)]
struct ReduceQuery {
    keys: Option<String>,
}

async fn handle_reduce(
    State(state): State<AppState>,
    Query(params): Query<ReduceQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let keys = params
        .keys
        .filter(|k| !k.is_empty())
        .ok_or_else(|| PipelineError::invalid_input("missing 'keys' parameter"))?;

    // comma-separated, whitespace around entries tolerated
    let partial_result_keys: Vec<String> = keys
        .split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();

    let response = stages::reduce(
        state.store.as_ref(),
        &ReduceRequest {
            partial_result_keys,
        },
    )
    .await?;

    Ok(Json(json!({
        "message": "reduce complete",
        "final_result_key": response.final_result_key,
        "unique_words": response.distinct_words,
    })))
}
