//! Health Routes
//!
//! Health check endpoints for monitoring.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (launch table loaded)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the launch table holds at least one row.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.table().is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

/// GET /health
///
/// Full health status with dataset details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let table = state.table();
    let synthesized: Vec<String> = table
        .synthesized_columns()
        .into_iter()
        .map(|c| c.name().to_string())
        .collect();

    // An empty table or null-filled columns still serve, but degraded
    let status = if table.is_empty() || !synthesized.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        source: table.source().to_string(),
        rows: table.len(),
        synthesized_columns: synthesized,
        loaded_at: table.loaded_at().to_rfc3339(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
