//! Reactive Dashboard
//!
//! Wires the page controls to the chart updaters. Every output is produced
//! by one registered [`Callback`] that declares the controls it reads. When
//! a control changes, only the callbacks listing it as an input run.
//!
//! # Default wiring
//!
//! | Output                          | Inputs                             |
//! |---------------------------------|------------------------------------|
//! | `success-pie-chart`             | `site-dropdown`                    |
//! | `success-payload-scatter-chart` | `site-dropdown`, `payload-slider`  |
//!
//! # Example
//!
//! ```rust
//! use launchdash::dashboard::{ControlId, Dashboard, OutputId};
//! use launchdash::dataset::{LaunchRecord, LaunchTable, Outcome};
//! use std::sync::Arc;
//!
//! let table = LaunchTable::from_records(vec![
//!     LaunchRecord::new("SiteA", Outcome::Success).payload(500.0),
//! ]);
//! let dashboard = Dashboard::new(Arc::new(table));
//! let values = dashboard.layout().initial_values();
//!
//! let updates = dashboard.on_change(ControlId::PayloadSlider, &values);
//! assert_eq!(updates.len(), 1);
//! assert_eq!(updates[0].0, OutputId::PayloadScatterChart);
//! ```

mod controls;
mod layout;

pub use controls::{ControlId, ControlValues, OutputId};
pub use layout::{
    DashboardLayout, SiteOption, SliderMark, SliderSpec, DEFAULT_PAYLOAD_MAX, DEFAULT_PAYLOAD_MIN,
    PAGE_TITLE, PAYLOAD_STEP,
};

use std::sync::Arc;
use thiserror::Error;

use crate::charts::{payload_scatter, success_pie, Figure};
use crate::dataset::LaunchTable;

/// Dashboard errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Unknown control: {0}")]
    UnknownControl(String),

    #[error("Unknown output: {0}")]
    UnknownOutput(String),
}

/// Chart updater signature: a pure function of the table and control values
pub type UpdateFn = fn(&LaunchTable, &ControlValues) -> Figure;

/// One output and the controls it depends on
#[derive(Clone)]
pub struct Callback {
    pub output: OutputId,
    pub inputs: Vec<ControlId>,
    pub update: UpdateFn,
}

impl Callback {
    pub fn new(output: OutputId, inputs: &[ControlId], update: UpdateFn) -> Self {
        Self {
            output,
            inputs: inputs.to_vec(),
            update,
        }
    }

    pub fn depends_on(&self, control: ControlId) -> bool {
        self.inputs.contains(&control)
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish()
    }
}

fn update_pie(table: &LaunchTable, values: &ControlValues) -> Figure {
    success_pie(table, &values.site)
}

fn update_scatter(table: &LaunchTable, values: &ControlValues) -> Figure {
    payload_scatter(table, &values.site, &values.payload)
}

/// The launch table plus the callbacks that render it
#[derive(Debug)]
pub struct Dashboard {
    table: Arc<LaunchTable>,
    layout: DashboardLayout,
    callbacks: Vec<Callback>,
}

impl Dashboard {
    /// Create a dashboard with the default pie and scatter wiring
    pub fn new(table: Arc<LaunchTable>) -> Self {
        let mut dashboard = Self::empty(table);
        dashboard.register(Callback::new(
            OutputId::SuccessPieChart,
            &[ControlId::SiteDropdown],
            update_pie,
        ));
        dashboard.register(Callback::new(
            OutputId::PayloadScatterChart,
            &[ControlId::SiteDropdown, ControlId::PayloadSlider],
            update_scatter,
        ));
        dashboard
    }

    /// Create a dashboard with no callbacks registered
    pub fn empty(table: Arc<LaunchTable>) -> Self {
        let layout = DashboardLayout::from_table(&table);
        Self {
            table,
            layout,
            callbacks: Vec::new(),
        }
    }

    /// Register a callback, replacing any existing one for the same output
    pub fn register(&mut self, callback: Callback) {
        self.callbacks.retain(|c| c.output != callback.output);
        tracing::debug!(output = %callback.output, inputs = ?callback.inputs, "Registered callback");
        self.callbacks.push(callback);
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    pub fn callbacks(&self) -> &[Callback] {
        &self.callbacks
    }

    /// Outputs that must be recomputed when `control` changes
    pub fn dependents(&self, control: ControlId) -> Vec<OutputId> {
        self.callbacks
            .iter()
            .filter(|c| c.depends_on(control))
            .map(|c| c.output)
            .collect()
    }

    /// Recompute the outputs that depend on the changed control
    pub fn on_change(&self, changed: ControlId, values: &ControlValues) -> Vec<(OutputId, Figure)> {
        tracing::debug!(control = %changed, site = %values.site, "Control changed");
        self.callbacks
            .iter()
            .filter(|c| c.depends_on(changed))
            .map(|c| (c.output, (c.update)(&self.table, values)))
            .collect()
    }

    /// Compute every output (initial render)
    pub fn render_all(&self, values: &ControlValues) -> Vec<(OutputId, Figure)> {
        self.callbacks
            .iter()
            .map(|c| (c.output, (c.update)(&self.table, values)))
            .collect()
    }

    /// Compute a single output
    pub fn render(&self, output: OutputId, values: &ControlValues) -> Result<Figure, DashboardError> {
        self.callbacks
            .iter()
            .find(|c| c.output == output)
            .map(|c| (c.update)(&self.table, values))
            .ok_or_else(|| DashboardError::UnknownOutput(output.to_string()))
    }
}
