//! Chart error types

use thiserror::Error;

/// Errors raised while building chart inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Lower payload bound exceeds the upper bound
    #[error("Invalid payload range: lower bound {lo} exceeds upper bound {hi}")]
    InvertedRange { lo: f64, hi: f64 },

    /// A payload bound is NaN or infinite
    #[error("Invalid payload range: bounds must be finite numbers")]
    NonFiniteBound,
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
