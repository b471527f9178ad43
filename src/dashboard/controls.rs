//! Controls and Outputs
//!
//! Identities of the page's input controls and chart outputs, and the
//! current value of every control.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::DashboardError;
use crate::charts::{PayloadRange, SiteSelection};

/// An input control on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ControlId {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

impl ControlId {
    pub const ALL: [ControlId; 2] = [ControlId::SiteDropdown, ControlId::PayloadSlider];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlId::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownControl(s.to_string()))
    }
}

/// A chart area on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum OutputId {
    #[serde(rename = "success-pie-chart")]
    SuccessPieChart,
    #[serde(rename = "success-payload-scatter-chart")]
    PayloadScatterChart,
}

impl OutputId {
    pub const ALL: [OutputId; 2] = [OutputId::SuccessPieChart, OutputId::PayloadScatterChart];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::PayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputId::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownOutput(s.to_string()))
    }
}

/// Current value of every control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlValues {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl ControlValues {
    pub fn new(site: SiteSelection, payload: PayloadRange) -> Self {
        Self { site, payload }
    }
}
