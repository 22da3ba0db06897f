//! Factify HTTP REST API
//!
//! Axum-based HTTP server exposing the claim analysis endpoint.
//!
//! Architecture: each endpoint has a thin axum handler that delegates to a
//! pure inner function. The inner functions are directly testable without
//! axum dispatch machinery.
//!
//! Endpoints:
//! - GET  /         — health check with static model version
//! - POST /analyze  — classify a claim and return the analysis

use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use factify_core::{AnalysisResponse, Analyzer, ClaimRequest, FactifyConfig, MODEL_VERSION};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

/// Shared state for all HTTP handlers
#[derive(Clone)]
pub struct HttpState {
    pub analyzer: Analyzer,
    pub config: FactifyConfig,
}

/// Build the Axum router with all endpoints
pub fn build_router(state: Arc<HttpState>) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .with_state(state)
}

/// Start the HTTP server on the configured address.
/// Gracefully shuts down when the broadcast shutdown signal fires.
pub async fn start_http_server(
    analyzer: Analyzer,
    config: FactifyConfig,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<()> {
    let addr = format!("{}:{}", config.http.host, config.http.port);
    let state = Arc::new(HttpState { analyzer, config });

    let app = build_router(state);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Factify HTTP API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
            tracing::info!("HTTP server shutting down...");
        })
        .await?;

    Ok(())
}

// ============================================================================
// Inner (directly testable) business logic functions
// ============================================================================

/// Inner health check — static status and model version (pure, no IO).
pub fn health_inner() -> serde_json::Value {
    serde_json::json!({
        "status": "online",
        "model_version": MODEL_VERSION,
    })
}

/// Inner analyze — runs the mock classification pipeline.
///
/// Payload-shape validation (missing or mistyped `text`) is handled by the
/// axum `Json` extractor before this runs, so the request here is always
/// well-formed and the operation cannot fail.
pub fn analyze_inner(analyzer: &Analyzer, req: ClaimRequest) -> AnalysisResponse {
    analyzer.analyze(&req.text)
}

// ============================================================================
// Axum handler wrappers (thin — delegate to inner functions)
// ============================================================================

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(health_inner()))
}

pub async fn analyze_handler(
    State(state): State<Arc<HttpState>>,
    Json(req): Json<ClaimRequest>,
) -> impl IntoResponse {
    let response = analyze_inner(&state.analyzer, req);
    (StatusCode::OK, Json(response))
}

// ============================================================================
// Unit Tests — call inner functions directly
// ============================================================================
