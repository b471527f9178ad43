//! Chart Routes
//!
//! Reactive chart updates for the page, plus direct chart endpoints.
//!
//! - POST /api/v1/update - Recompute outputs after a control change
//! - GET /api/v1/charts/pie - Success pie for a site
//! - GET /api/v1/charts/scatter - Payload scatter for a site and range

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{resolve_range, FilterParams, UpdateRequest, UpdateResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::charts::{payload_scatter, success_pie, Figure};
use crate::dashboard::{ControlId, ControlValues};

/// POST /api/v1/update
///
/// Renders the outputs that depend on `changed`, or all outputs when no
/// control is named.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateRequest>,
) -> ApiResult<Json<UpdateResponse>> {
    let dashboard = &state.dashboard;

    let (lo, hi) = match req.payload {
        Some([lo, hi]) => (Some(lo), Some(hi)),
        None => (None, None),
    };
    let payload = resolve_range(lo, hi, dashboard.layout())?;
    let values = ControlValues::new(req.site, payload);

    let updates = match req.changed.as_deref() {
        Some(id) => dashboard.on_change(id.parse::<ControlId>()?, &values),
        None => dashboard.render_all(&values),
    };

    Ok(Json(UpdateResponse::from_updates(updates)))
}

/// GET /api/v1/charts/pie
pub async fn pie_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Json<Figure> {
    Json(success_pie(state.table(), &params.site()))
}

/// GET /api/v1/charts/scatter
pub async fn scatter_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> ApiResult<Json<Figure>> {
    let payload = params.payload(state.dashboard.layout())?;
    Ok(Json(payload_scatter(state.table(), &params.site(), &payload)))
}
