//! The curation session
//!
//! One explicit context object carrying everything the drivers need: the
//! catalog loaded from disk and the clients talking to the index. The
//! connectivity probe runs once, before any other I/O; later network
//! failures surface as ordinary fetch errors.

use std::time::Duration;

use gleaner_core::{net, DataDir, Result};
use gleaner_fetch::SourceFetcher;
use gleaner_index::{Catalog, CatalogClient};

/// Delay between batch-driver iterations
const PACE: Duration = Duration::from_secs(2);

/// Session state shared by every driver
pub struct Session {
    pub catalog: Catalog,
    pub client: CatalogClient,
    pub fetcher: SourceFetcher,
    pace: Duration,
}

impl Session {
    /// Probe connectivity, then load or initialize the catalog.
    pub async fn connect(layout: DataDir) -> Result<Self> {
        net::ensure_online().await?;
        Self::with_client(layout, CatalogClient::new()?).await
    }

    /// Build a session around a preconfigured catalog client.
    ///
    /// Skips the connectivity probe, so tests can aim at local fixtures.
    pub async fn with_client(layout: DataDir, client: CatalogClient) -> Result<Self> {
        let catalog = client.open_catalog(layout).await?;

        Ok(Self {
            catalog,
            client,
            fetcher: SourceFetcher::new()?,
            pace: PACE,
        })
    }

    /// Override the inter-iteration delay
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// Enable or disable download progress bars
    pub fn with_progress(mut self, show: bool) -> Self {
        self.fetcher = self.fetcher.with_progress(show);
        self
    }

    /// Sleep out the configured inter-iteration delay
    pub(crate) async fn pace(&self) {
        if !self.pace.is_zero() {
            tokio::time::sleep(self.pace).await;
        }
    }
}
