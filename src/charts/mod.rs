//! Charts
//!
//! Pure chart updaters. Each one maps the launch table plus the current
//! filter values to a [`Figure`]; neither keeps state between calls.
//!
//! - [`success_pie`]: Success vs Failure counts for a site
//! - [`payload_scatter`]: payload mass against outcome, filtered by site and
//!   payload range

mod error;
mod figure;
mod filter;
mod pie;
mod scatter;

pub use error::{ChartError, ChartResult};
pub use figure::{
    series_color, Axis, Figure, Layout, Legend, PieMarker, PieTrace, ScatterMarker, ScatterTrace,
    Title, Trace, SERIES_COLORS,
};
pub use filter::{filter_rows, PayloadRange, SiteSelection, ALL_SITES};
pub use pie::{outcome_counts, success_pie, OutcomeCounts};
pub use scatter::{payload_scatter, ColorBy, UNKNOWN_ORBIT};
