//! Application State
//!
//! Shared state accessible by all API handlers.
//! Built once at startup and wrapped in Arc for sharing across tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ApiConfig;
use crate::dashboard::Dashboard;
use crate::dataset::LaunchTable;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Dashboard callbacks over the loaded launch table
    pub dashboard: Arc<Dashboard>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state around an already-built dashboard
    pub fn new(dashboard: Arc<Dashboard>, config: ApiConfig) -> Self {
        Self {
            dashboard,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Create state with the default dashboard wiring for a table
    pub fn from_table(table: LaunchTable, config: ApiConfig) -> Self {
        Self::new(Arc::new(Dashboard::new(Arc::new(table))), config)
    }

    /// The loaded launch table
    pub fn table(&self) -> &LaunchTable {
        self.dashboard.table()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
