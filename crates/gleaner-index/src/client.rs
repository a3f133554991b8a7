//! Catalog construction and per-package index queries
//!
//! Wraps the shared HTTP client with the index endpoints: the root package
//! listing, per-package listing pages (link resolution), the metadata
//! document endpoint, and the download-rank rows backing the popularity
//! set. Endpoints default to the public index and are injectable so tests
//! can aim at a mock server.

use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use gleaner_core::{http, store, DataDir, Error, Result};

use crate::catalog::Catalog;
use crate::html;

/// Substring identifying a source-archive href on a listing page
const SOURCE_ARCHIVE_MARKER: &str = ".tar.gz";

/// Remote endpoints the catalog is built from
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Simple-index root listing every package name
    pub simple: String,

    /// Root of the per-package metadata documents
    pub metadata: String,

    /// Download-rank document backing the popularity set
    pub popular: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            simple: "https://pypi.org/simple/".to_string(),
            metadata: "https://pypi.python.org/pypi/".to_string(),
            popular: "https://hugovk.github.io/top-pypi-packages/top-pypi-packages.json"
                .to_string(),
        }
    }
}

/// Download-rank document shape; unknown fields are ignored
#[derive(Debug, Deserialize)]
struct PopularityRows {
    rows: Vec<PopularityRow>,
}

#[derive(Debug, Deserialize)]
struct PopularityRow {
    project: String,
}

/// Index client: a configured HTTP client plus the endpoint set
pub struct CatalogClient {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl CatalogClient {
    /// Create a client against the default public endpoints
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: http::build_client()?,
            endpoints: Endpoints::default(),
        })
    }

    /// Override the endpoint set
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Load the catalog from `layout`, fetching and persisting the package
    /// listing and popularity rows on first run.
    ///
    /// A non-empty persisted index is reused as-is; no listing request is
    /// made for it.
    pub async fn open_catalog(&self, layout: DataDir) -> Result<Catalog> {
        let mut catalog = Catalog::load(layout)?;

        if catalog.is_empty() {
            info!("No cataloged packages yet, fetching the index listing");
            let names = self.fetch_package_names().await?;
            catalog.insert_names(names);
            catalog.save()?;
            info!("Cataloged {} packages", catalog.len());
        }

        if catalog.popular_len() == 0 {
            info!("Fetching download-rank rows");
            let rows = self.fetch_popular().await?;
            store::write_json(&catalog.layout().popular_file(), &rows)?;
            catalog.set_popular(rows);
            info!("Recorded {} popular packages", catalog.popular_len());
        }

        Ok(catalog)
    }

    /// Fetch the full package-name listing from the simple index.
    pub async fn fetch_package_names(&self) -> Result<Vec<String>> {
        let url = self.endpoints.simple.clone();
        let body = self.get_text(&url).await?;
        let hrefs =
            html::anchor_hrefs(&body).map_err(|err| Error::payload(&url, err.to_string()))?;

        Ok(hrefs
            .iter()
            .filter_map(|href| html::package_name(href))
            .collect())
    }

    /// Fetch the download-rank rows and return the project names.
    pub async fn fetch_popular(&self) -> Result<Vec<String>> {
        let url = self.endpoints.popular.clone();
        let body = self.get_text(&url).await?;
        let rows: PopularityRows =
            serde_json::from_str(&body).map_err(|err| Error::payload(&url, err.to_string()))?;

        Ok(rows.rows.into_iter().map(|row| row.project).collect())
    }

    /// Resolve the newest source-archive link for `name` into its record.
    ///
    /// The per-package listing lists releases ascending, so the last
    /// source-archive href is the most recent one. Returns `Ok(false)` and
    /// leaves the record untouched when the page lists no source archive;
    /// transport failures and non-success statuses are errors.
    pub async fn resolve_link(&self, catalog: &mut Catalog, name: &str) -> Result<bool> {
        let url = self.package_listing_url(name);
        let body = self.get_text(&url).await?;
        let hrefs =
            html::anchor_hrefs(&body).map_err(|err| Error::payload(&url, err.to_string()))?;

        let Some(candidate) = hrefs
            .iter()
            .filter(|href| href.contains(SOURCE_ARCHIVE_MARKER))
            .next_back()
        else {
            debug!("No source archive listed for {name}");
            return Ok(false);
        };

        let (raw_link, digest) = html::split_digest(candidate);

        // Listing pages may use relative file URLs.
        let base = Url::parse(&url).map_err(|err| Error::payload(&url, err.to_string()))?;
        let link = base
            .join(&raw_link)
            .map_err(|err| Error::payload(&url, err.to_string()))?;

        let record = catalog.record_mut(name);
        record.source_link = Some(link.to_string());
        record.digest = digest;
        debug!("Resolved {name} -> {link}");
        Ok(true)
    }

    /// Retrieve the metadata document for `name`.
    ///
    /// The document carries the `info`, `last_serial`, `releases`, `urls`,
    /// and `vulnerabilities` keys; it is returned as parsed JSON without
    /// further interpretation.
    pub async fn package_metadata(&self, name: &str) -> Result<serde_json::Value> {
        let url = format!("{}{name}/json", self.endpoints.metadata);
        let body = self.get_text(&url).await?;
        serde_json::from_str(&body).map_err(|err| Error::payload(&url, err.to_string()))
    }

    fn package_listing_url(&self, name: &str) -> String {
        let simple = &self.endpoints.simple;
        if simple.ends_with('/') {
            format!("{simple}{name}/")
        } else {
            format!("{simple}/{name}/")
        }
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::status(url, status.as_u16()));
        }
        Ok(response.text().await?)
    }
}
