//! Launch Records Dashboard Server
//!
//! Run with: cargo run --bin launchdash
//!
//! Loads the launch table once, then serves the dashboard on
//! http://127.0.0.1:8050/ until Ctrl+C.
//!
//! # Configuration
//!
//! Optional TOML file at `./launchdash.toml` or
//! `<config dir>/launchdash/config.toml`. `RUST_LOG` overrides the log filter.

use anyhow::Context;
use launchdash::api::{serve, AppState};
use launchdash::config::{Config, LogFormat, LoggingConfig};
use launchdash::dataset::load_table;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_path) = Config::load_default().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    tracing::info!("Starting Launch Records Dashboard v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("No config file found, using defaults"),
    }

    // One-shot load; no retries
    let table = load_table(&config.data)
        .await
        .context("Failed to load launch data")?;

    tracing::info!(
        source = table.source(),
        rows = table.len(),
        sites = table.sites().len(),
        "Launch table loaded"
    );
    for column in table.synthesized_columns() {
        tracing::warn!("Column {:?} missing from source, using nulls", column.name());
    }

    let state = AppState::from_table(table, config.api.clone());

    serve(state, &config.api)
        .await
        .context("Dashboard server failed")?;

    tracing::info!("Launch Records Dashboard stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
