//! The package catalog
//!
//! An insertion-ordered map from package name to its resolution/download
//! state, plus the set of popular packages excluded from uncommon
//! sampling. Both are loaded once per session and persisted by explicit
//! save calls.

use std::collections::HashSet;

use indexmap::IndexMap;

use gleaner_core::{store, DataDir, Result};

use crate::record::PackageRecord;

/// The persisted index shape: package name to record, insertion-ordered
pub type PackageIndex = IndexMap<String, PackageRecord>;

/// Session-scoped package index and popularity set
pub struct Catalog {
    index: PackageIndex,
    popular: HashSet<String>,
    layout: DataDir,
}

impl Catalog {
    /// Load previously persisted state from `layout`.
    ///
    /// Missing or damaged files yield empty structures; the catalog client
    /// fills those in from the remote index on first run.
    pub fn load(layout: DataDir) -> Result<Self> {
        let index: PackageIndex = store::read_json(&layout.index_file(), false)?;
        let popular: Vec<String> = store::read_json(&layout.popular_file(), false)?;

        Ok(Self {
            index,
            popular: popular.into_iter().collect(),
            layout,
        })
    }

    /// The on-disk layout backing this catalog
    pub fn layout(&self) -> &DataDir {
        &self.layout
    }

    /// Number of cataloged packages
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when no packages are cataloged yet
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of packages in the popularity set
    pub fn popular_len(&self) -> usize {
        self.popular.len()
    }

    /// Package names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(|name| name.as_str())
    }

    /// Look up a package's record
    pub fn record(&self, name: &str) -> Option<&PackageRecord> {
        self.index.get(name)
    }

    /// Mutable access to a package's record, creating an empty one for a
    /// name not seen before. Existing keys are never duplicated.
    pub fn record_mut(&mut self, name: &str) -> &mut PackageRecord {
        self.index.entry(name.to_string()).or_default()
    }

    /// Add names to the index, each with an empty record. Names already
    /// present keep their state.
    pub fn insert_names(&mut self, names: impl IntoIterator<Item = String>) {
        for name in names {
            self.index.entry(name).or_default();
        }
    }

    /// Replace the popularity set
    pub fn set_popular(&mut self, names: Vec<String>) {
        self.popular = names.into_iter().collect();
    }

    /// True when `name` is in the popularity set
    pub fn is_popular(&self, name: &str) -> bool {
        self.popular.contains(name)
    }

    /// Names outside the popularity set that the sampling pass has not
    /// visited yet, in index order.
    pub fn uncommon_candidates(&self) -> Vec<String> {
        self.index
            .iter()
            .filter(|(name, record)| !self.popular.contains(name.as_str()) && !record.visited())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Persist the index to its JSON file
    pub fn save(&self) -> Result<()> {
        store::write_json(&self.layout.index_file(), &self.index)
    }
}
