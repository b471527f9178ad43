//! Data Sources
//!
//! Where the launch CSV comes from: a local cleaned export (preferred) or the
//! remote lab dataset over HTTP. The startup load tries them in that order,
//! once, with no retries.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::{DatasetError, DatasetResult};
use super::schema::{SourceSchema, IBM_LAB, LOCAL_CLEAN};
use super::types::LaunchTable;
use crate::config::DataConfig;

/// A place the launch CSV can be fetched from
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Human-readable location (path or URL)
    fn describe(&self) -> String;

    /// Header spellings used by this source
    fn schema(&self) -> &'static SourceSchema;

    /// Fetch the raw CSV text
    async fn fetch(&self) -> DatasetResult<String>;

    /// Fetch and normalize into the canonical table
    async fn load(&self) -> DatasetResult<LaunchTable> {
        let text = self.fetch().await?;
        let table = LaunchTable::from_csv_str(&text, self.schema())?;
        Ok(table.with_source(self.describe()))
    }
}

/// Cleaned CSV export on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

#[async_trait]
impl TableSource for LocalFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn schema(&self) -> &'static SourceSchema {
        &LOCAL_CLEAN
    }

    async fn fetch(&self) -> DatasetResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DatasetError::ReadFile {
                path: self.path.clone(),
                source,
            })
    }
}

/// Lab dataset served over HTTP
pub struct RemoteCsvSource {
    client: reqwest::Client,
    url: String,
}

impl RemoteCsvSource {
    /// Create a remote source with a bounded request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> DatasetResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TableSource for RemoteCsvSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn schema(&self) -> &'static SourceSchema {
        &IBM_LAB
    }

    async fn fetch(&self) -> DatasetResult<String> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Load the launch table once at startup.
///
/// A local file that exists is authoritative: read or parse failures are
/// returned as-is. Only an absent local file falls through to the remote
/// source, and a transport failure there reports both locations.
pub async fn load_table(config: &DataConfig) -> DatasetResult<LaunchTable> {
    let local = LocalFileSource::new(&config.local_path);

    if local.exists() {
        tracing::info!("Loading launch data from local file {:?}", local.path());
        return local.load().await;
    }

    tracing::info!(
        "Local file {:?} not found, fetching launch data from {}",
        local.path(),
        config.remote_url
    );

    let remote = RemoteCsvSource::new(
        config.remote_url.clone(),
        Duration::from_secs(config.fetch_timeout_secs),
    )?;

    remote.load().await.map_err(|e| {
        if e.is_transport() {
            DatasetError::Unavailable {
                local: local.path().to_path_buf(),
                remote: remote.url().to_string(),
                reason: e.to_string(),
            }
        } else {
            e
        }
    })
}
