//! # gleaner-index
//!
//! The package catalog: loading and persisting the package-name index and
//! popularity set, parsing the simple-index HTML pages, resolving
//! per-package source-archive links, and retrieving metadata documents.

pub mod catalog;
pub mod client;
pub mod html;
pub mod record;

pub use catalog::{Catalog, PackageIndex};
pub use client::{CatalogClient, Endpoints};
pub use record::PackageRecord;
