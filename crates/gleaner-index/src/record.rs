//! Per-package catalog state

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Resolution and download state for a single package.
///
/// Every field stays absent until the corresponding step has succeeded, so
/// a freshly cataloged package serializes as the empty object `{}` and the
/// persisted index only grows fields as work completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageRecord {
    /// URL of the resolved source archive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,

    /// Content digest published alongside the link, `<algorithm>=<hex>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,

    /// Local path of the downloaded archive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_path: Option<PathBuf>,

    /// Whether the sampling pass has already visited this package
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloaded: Option<bool>,
}

impl PackageRecord {
    /// True once a source link has been resolved
    pub fn has_link(&self) -> bool {
        self.source_link.is_some()
    }

    /// True once the sampling pass has visited this package
    pub fn visited(&self) -> bool {
        self.downloaded.unwrap_or(false)
    }
}
