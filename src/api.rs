//! HTTP API for the Budget Engine.
//!
//! This module exposes a minimal REST API around the budget engine
//! using the [`axum`](https://crates.io/crates/axum) framework.  The
//! API allows clients to submit trip parameters and receive either
//! the raw budget breakdown or the breakdown with advisory text, in
//! JSON.  The engine is stateless over compile-time tables, so the
//! handlers share no state and need no locking.

use crate::engine::{calculate_optimized_budget, get_budget_recommendations};
use crate::error::BudgetError;
use crate::models::BudgetRequest;
use anyhow::Result;
use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use tracing::{debug, info, warn};

/// Build the API router.
pub fn build_router() -> Router {
    Router::new()
        .route("/api/budget/optimize", post(optimize_handler))
        .route("/api/budget/recommendations", post(recommendations_handler))
}

/// Handler for POST /api/budget/optimize
async fn optimize_handler(Json(request): Json<BudgetRequest>) -> impl IntoResponse {
    debug!(destination = %request.destination, duration = request.duration, "optimize request");
    match calculate_optimized_budget(&request) {
        Ok(breakdown) => (StatusCode::OK, Json(breakdown)).into_response(),
        Err(err) => reject(&request, err),
    }
}

/// Handler for POST /api/budget/recommendations
async fn recommendations_handler(Json(request): Json<BudgetRequest>) -> impl IntoResponse {
    debug!(destination = %request.destination, duration = request.duration, "recommendations request");
    match get_budget_recommendations(&request) {
        Ok(recommendation) => (StatusCode::OK, Json(recommendation)).into_response(),
        Err(err) => reject(&request, err),
    }
}

fn reject(request: &BudgetRequest, err: BudgetError) -> axum::response::Response {
    warn!(destination = %request.destination, error = %err, "rejected budget request");
    let body = Json(serde_json::json!({ "error": err.to_string() }));
    (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
}

/// Launch the API server.  This function builds the router and binds
/// to the supplied address.  It blocks until the server terminates
/// (e.g. when interrupted).
pub async fn serve(addr: &str) -> Result<()> {
    let router = build_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "budget engine listening");
    axum::serve(listener, router).await?;
    Ok(())
}
