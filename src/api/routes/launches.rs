//! Launch Routes
//!
//! Filtered view of the canonical launch table.
//!
//! - GET /api/v1/launches - Matching rows as JSON or CSV

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{LaunchesParams, LaunchesResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts::{filter_rows, OutcomeCounts};
use crate::dataset::LaunchRecord;

/// GET /api/v1/launches
///
/// Rows matching the site and payload filters, in canonical column form.
pub async fn list_launches(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LaunchesParams>,
) -> ApiResult<Response> {
    let filter = params.filter();
    let payload = filter.payload(state.dashboard.layout())?;
    let site = filter.site();

    let rows: Vec<LaunchRecord> = filter_rows(state.table(), &site, Some(&payload))
        .into_iter()
        .cloned()
        .collect();

    match params.format.to_lowercase().as_str() {
        "json" => Ok(format_json_response(rows)),
        "csv" => format_csv_response(&rows),
        other => Err(ApiError::Validation(format!(
            "Invalid format: {}. Use json or csv",
            other
        ))),
    }
}

fn format_json_response(rows: Vec<LaunchRecord>) -> Response {
    let mut counts = OutcomeCounts::default();
    for row in &rows {
        counts.record(row.outcome);
    }

    Json(LaunchesResponse {
        total: rows.len(),
        counts,
        launches: rows,
    })
    .into_response()
}

fn format_csv_response(rows: &[LaunchRecord]) -> ApiResult<Response> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| ApiError::Internal(format!("CSV encoding failed: {}", e)))?;
    }
    let body = writer
        .into_inner()
        .map_err(|e| ApiError::Internal(format!("CSV encoding failed: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"launches.csv\""),
        ],
        body,
    )
        .into_response())
}
