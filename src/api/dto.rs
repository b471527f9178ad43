//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::charts::{Figure, OutcomeCounts, PayloadRange, SiteSelection};
use crate::dashboard::{DashboardLayout, OutputId};
use crate::dataset::LaunchRecord;

use super::error::ApiResult;

// ============================================
// UPDATE DTOs
// ============================================

/// Reactive update request: current control values plus the control that
/// changed. Without `changed`, every output is rendered.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    /// Control id, e.g. "site-dropdown" or "payload-slider"
    #[serde(default)]
    pub changed: Option<String>,
    /// Selected site or "ALL"
    #[serde(default)]
    pub site: SiteSelection,
    /// Payload range as [lo, hi]; defaults to the slider bounds
    #[serde(default)]
    pub payload: Option<[f64; 2]>,
}

/// Reactive update response: new figures keyed by output id
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub outputs: BTreeMap<OutputId, Figure>,
}

impl UpdateResponse {
    pub fn from_updates(updates: Vec<(OutputId, Figure)>) -> Self {
        Self {
            outputs: updates.into_iter().collect(),
        }
    }
}

// ============================================
// CHART DTOs
// ============================================

/// Filter query parameters shared by the chart and launch endpoints
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    /// Selected site or "ALL" (default)
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound (kg); defaults to the slider minimum
    #[serde(default)]
    pub lo: Option<f64>,
    /// Upper payload bound (kg); defaults to the slider maximum
    #[serde(default)]
    pub hi: Option<f64>,
}

impl FilterParams {
    pub fn site(&self) -> SiteSelection {
        self.site
            .as_deref()
            .map(SiteSelection::from)
            .unwrap_or_default()
    }

    /// Requested range, with missing bounds taken from the layout
    pub fn payload(&self, layout: &DashboardLayout) -> ApiResult<PayloadRange> {
        resolve_range(self.lo, self.hi, layout)
    }
}

/// Fill missing bounds from the slider and validate
pub fn resolve_range(
    lo: Option<f64>,
    hi: Option<f64>,
    layout: &DashboardLayout,
) -> ApiResult<PayloadRange> {
    let [min, max] = layout.payload_slider.value;
    let lo = lo.unwrap_or(min as f64);
    let hi = hi.unwrap_or(max as f64);
    Ok(PayloadRange::new(lo, hi)?)
}

// ============================================
// LAUNCH DTOs
// ============================================

/// Launch listing parameters
#[derive(Debug, Deserialize)]
pub struct LaunchesParams {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub lo: Option<f64>,
    #[serde(default)]
    pub hi: Option<f64>,
    /// Format: json or csv
    #[serde(default = "default_launches_format")]
    pub format: String,
}

impl LaunchesParams {
    pub fn filter(&self) -> FilterParams {
        FilterParams {
            site: self.site.clone(),
            lo: self.lo,
            hi: self.hi,
        }
    }
}

fn default_launches_format() -> String {
    "json".to_string()
}

/// Launch listing response (JSON format)
#[derive(Debug, Serialize)]
pub struct LaunchesResponse {
    /// Matching rows in canonical form
    pub launches: Vec<LaunchRecord>,
    /// Outcome counts over the matching rows
    pub counts: OutcomeCounts,
    /// Number of rows returned
    pub total: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Where the launch table was loaded from
    pub source: String,
    /// Number of launches loaded
    pub rows: usize,
    /// Canonical columns filled with nulls at load time
    pub synthesized_columns: Vec<String>,
    /// Load time (RFC 3339)
    pub loaded_at: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchTable, Outcome};

    fn layout() -> DashboardLayout {
        DashboardLayout::from_table(&LaunchTable::from_records(vec![
            LaunchRecord::new("SiteA", Outcome::Success).payload(500.0),
            LaunchRecord::new("SiteB", Outcome::Failure).payload(3000.0),
        ]))
    }

    #[test]
    fn test_update_request_defaults() {
        let req: UpdateRequest = serde_json::from_str("{}").unwrap();

        assert!(req.changed.is_none());
        assert!(req.site.is_all());
        assert!(req.payload.is_none());
    }

    #[test]
    fn test_update_request_full() {
        let req: UpdateRequest = serde_json::from_str(
            r#"{"changed": "payload-slider", "site": "SiteA", "payload": [1000, 2000]}"#,
        )
        .unwrap();

        assert_eq!(req.changed.as_deref(), Some("payload-slider"));
        assert_eq!(req.site, SiteSelection::from("SiteA"));
        assert_eq!(req.payload, Some([1000.0, 2000.0]));
    }

    #[test]
    fn test_filter_params_default_to_slider_bounds() {
        let params = FilterParams::default();
        let range = params.payload(&layout()).unwrap();

        assert!(params.site().is_all());
        assert_eq!((range.lo(), range.hi()), (500.0, 3000.0));
    }

    #[test]
    fn test_filter_params_inverted_range() {
        let params = FilterParams {
            site: None,
            lo: Some(2000.0),
            hi: Some(1000.0),
        };
        assert!(params.payload(&layout()).is_err());
    }
}
