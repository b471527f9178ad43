//! Row Filters
//!
//! The two filter values driven by the dashboard controls: a launch site
//! selection and a closed payload-mass interval.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{ChartError, ChartResult};
use crate::dataset::{LaunchRecord, LaunchTable};

/// Sentinel site value meaning "all sites"
pub const ALL_SITES: &str = "ALL";

/// Launch site selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record belongs to the selection.
    /// Records without a site only match [`SiteSelection::All`].
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site.as_deref() == Some(site.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES),
            SiteSelection::Site(site) => f.write_str(site),
        }
    }
}

/// Closed payload-mass interval `[lo, hi]` in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    lo: f64,
    hi: f64,
}

impl PayloadRange {
    /// Create a range; `lo` must not exceed `hi` and both must be finite
    pub fn new(lo: f64, hi: f64) -> ChartResult<Self> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(ChartError::NonFiniteBound);
        }
        if lo > hi {
            return Err(ChartError::InvertedRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Range between two whole-kilogram bounds, in either order
    pub fn between(a: i64, b: i64) -> Self {
        Self {
            lo: a.min(b) as f64,
            hi: a.max(b) as f64,
        }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Inclusive on both ends; a missing mass is never contained
    pub fn contains(&self, mass: Option<f64>) -> bool {
        mass.is_some_and(|m| m >= self.lo && m <= self.hi)
    }
}

/// Rows matching the site selection and, when given, the payload range
pub fn filter_rows<'a>(
    table: &'a LaunchTable,
    site: &SiteSelection,
    payload: Option<&PayloadRange>,
) -> Vec<&'a LaunchRecord> {
    table
        .iter()
        .filter(|r| site.matches(r))
        .filter(|r| payload.map_or(true, |range| range.contains(r.payload_mass_kg)))
        .collect()
}
