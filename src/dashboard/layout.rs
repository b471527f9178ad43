//! Page Layout
//!
//! Control options derived from the loaded table: the site list for the
//! dropdown and the bounds of the payload slider.

use serde::Serialize;

use super::controls::ControlValues;
use crate::charts::{PayloadRange, SiteSelection, ALL_SITES};
use crate::dataset::LaunchTable;

pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Slider bounds used when the table has no payload masses
pub const DEFAULT_PAYLOAD_MIN: i64 = 0;
pub const DEFAULT_PAYLOAD_MAX: i64 = 10_000;

pub const PAYLOAD_STEP: u32 = 100;

/// One dropdown entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Labelled tick on the slider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliderMark {
    pub value: i64,
    pub label: String,
}

/// Dual-ended payload range slider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliderSpec {
    pub min: i64,
    pub max: i64,
    pub step: u32,
    pub marks: Vec<SliderMark>,
    pub value: [i64; 2],
}

/// Everything the page needs to build its controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_options: Vec<SiteOption>,
    pub site_value: String,
    pub payload_slider: SliderSpec,
}

impl DashboardLayout {
    pub fn from_table(table: &LaunchTable) -> Self {
        let site_options = std::iter::once(SiteOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        })
        .chain(table.sites().into_iter().map(|s| SiteOption {
            label: s.clone(),
            value: s,
        }))
        .collect();

        // Observed bounds, truncated toward zero to whole kilograms
        let (min, max) = table
            .payload_bounds()
            .map(|(lo, hi)| (lo.trunc() as i64, hi.trunc() as i64))
            .unwrap_or((DEFAULT_PAYLOAD_MIN, DEFAULT_PAYLOAD_MAX));

        let marks = if min == max {
            vec![SliderMark { value: min, label: min.to_string() }]
        } else {
            vec![
                SliderMark { value: min, label: min.to_string() },
                SliderMark { value: max, label: max.to_string() },
            ]
        };

        Self {
            title: PAGE_TITLE.to_string(),
            site_options,
            site_value: ALL_SITES.to_string(),
            payload_slider: SliderSpec {
                min,
                max,
                step: PAYLOAD_STEP,
                marks,
                value: [min, max],
            },
        }
    }

    /// Control values the page starts with
    pub fn initial_values(&self) -> ControlValues {
        let [lo, hi] = self.payload_slider.value;
        ControlValues::new(
            SiteSelection::from(self.site_value.as_str()),
            PayloadRange::between(lo, hi),
        )
    }
}
