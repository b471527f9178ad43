//! # Launchdash
//!
//! Launch Records Dashboard - an interactive web dashboard for historical
//! rocket-launch outcomes.
//!
//! ## Features
//!
//! - **Schema normalization**: one canonical table from a local CSV export
//!   or the remote lab dataset, whatever their column spellings
//! - **Reactive charts**: a success pie and a payload scatter, recomputed
//!   when the site or payload controls change
//! - **HTTP server**: page, layout, chart and launch endpoints with Axum
//!
//! ## Modules
//!
//! - [`dataset`]: Loading and normalization of launch records
//! - [`charts`]: Pure chart updaters producing Plotly figures
//! - [`dashboard`]: Control/output wiring and page layout
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use launchdash::charts::{payload_scatter, success_pie, PayloadRange, SiteSelection};
//! use launchdash::dataset::{LaunchRecord, LaunchTable, Outcome};
//!
//! let table = LaunchTable::from_records(vec![
//!     LaunchRecord::new("SiteA", Outcome::Success).payload(500.0),
//!     LaunchRecord::new("SiteA", Outcome::Failure).payload(1500.0),
//!     LaunchRecord::new("SiteB", Outcome::Success).payload(3000.0),
//! ]);
//!
//! let pie = success_pie(&table, &SiteSelection::All);
//! assert_eq!(pie.layout.title.text, "Overall Success vs Failure");
//!
//! let range = PayloadRange::new(1000.0, 2000.0).unwrap();
//! let scatter = payload_scatter(&table, &SiteSelection::All, &range);
//! assert_eq!(scatter.point_count(), 1);
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod dataset;

// Re-export top-level types for convenience
pub use dataset::{
    load_table, CanonicalColumn, DatasetError, DatasetResult, LaunchRecord, LaunchTable, Outcome,
};

pub use charts::{
    outcome_counts, payload_scatter, success_pie, ChartError, Figure, OutcomeCounts, PayloadRange,
    SiteSelection, ALL_SITES,
};

pub use dashboard::{ControlId, ControlValues, Dashboard, DashboardError, DashboardLayout, OutputId};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DataConfig, LogFormat, LoggingConfig};
