//! On-disk layout of persisted state
//!
//! All catalog state lives under one data directory, selectable from the
//! CLI and defaulting to `data/` in the working directory.

use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "package_names.json";
const POPULAR_FILE: &str = "popular_packages.json";
const METADATA_DIR: &str = "metadata";
const DOWNLOADS_DIR: &str = "downloads";
const EXTRACTED_DIR: &str = "extracted";

/// Resolved locations of the persisted catalog files
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Create a layout rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory itself
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The persisted package index
    pub fn index_file(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// The persisted popularity list
    pub fn popular_file(&self) -> PathBuf {
        self.root.join(POPULAR_FILE)
    }

    /// Directory receiving per-package metadata documents
    pub fn metadata_dir(&self) -> PathBuf {
        self.root.join(METADATA_DIR)
    }

    /// Default destination for downloaded source archives
    pub fn downloads_dir(&self) -> PathBuf {
        self.root.join(DOWNLOADS_DIR)
    }

    /// Default destination for extracted build scripts
    pub fn extracted_dir(&self) -> PathBuf {
        self.root.join(EXTRACTED_DIR)
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_rooted_under_data_dir() {
        let layout = DataDir::new("/tmp/state");

        assert_eq!(layout.index_file(), Path::new("/tmp/state/package_names.json"));
        assert_eq!(
            layout.popular_file(),
            Path::new("/tmp/state/popular_packages.json")
        );
        assert_eq!(layout.metadata_dir(), Path::new("/tmp/state/metadata"));
        assert_eq!(layout.downloads_dir(), Path::new("/tmp/state/downloads"));
        assert_eq!(layout.extracted_dir(), Path::new("/tmp/state/extracted"));
    }
}
