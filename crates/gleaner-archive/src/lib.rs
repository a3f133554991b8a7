//! # gleaner-archive
//!
//! Archive filtering for downloaded source tarballs: repackaging the
//! Python-source subset into a smaller xz tar, and mining build scripts
//! out of an archive into standalone files.

pub mod extract;
pub mod repack;

pub use extract::extract_build_scripts;
pub use repack::{repack_sources, RepackSummary};
