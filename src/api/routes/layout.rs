//! Layout Route
//!
//! - GET /api/v1/layout - Control options and initial values

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::dashboard::DashboardLayout;

/// GET /api/v1/layout
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<DashboardLayout> {
    Json(state.dashboard.layout().clone())
}
