//! # gleaner-fetch
//!
//! Streaming downloads of resolved source archives: chunked writes to
//! disk with a single-pass SHA-256 of the stream.

pub mod download;

pub use download::{FetchedArchive, SourceFetcher};
