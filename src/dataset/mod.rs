//! Launch Dataset
//!
//! Loading and normalization of the launch records into one canonical,
//! read-only table.
//!
//! # Canonical columns
//!
//! | Column              | Type            |
//! |---------------------|-----------------|
//! | `Launch Site`       | text, nullable  |
//! | `class`             | 0 or 1          |
//! | `Payload Mass (kg)` | float, nullable |
//! | `Orbit`             | text, nullable  |
//!
//! # Example
//!
//! ```rust
//! use launchdash::dataset::{LaunchTable, LOCAL_CLEAN};
//!
//! let csv = "LaunchSite,Class,PayloadMass\nSiteA,1,500\nSiteB,,1500\n";
//! let table = LaunchTable::from_csv_str(csv, &LOCAL_CLEAN).unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert!(!table.has_orbit());
//! ```

mod error;
mod loader;
mod schema;
mod source;
mod types;

pub use error::{DatasetError, DatasetResult};
pub use schema::{
    coerce_number, coerce_text, CanonicalColumn, ColumnMap, ColumnOrigin, SourceSchema, IBM_LAB,
    LOCAL_CLEAN,
};
pub use source::{load_table, LocalFileSource, RemoteCsvSource, TableSource};
pub use types::{LaunchRecord, LaunchTable, Outcome};
