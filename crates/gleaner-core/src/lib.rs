//! # gleaner-core
//!
//! Core library for the Gleaner CLI providing:
//! - The workspace-wide error taxonomy
//! - Flat-file JSON persistence for catalog state
//! - The outbound connectivity probe run at session start
//! - The on-disk data layout and shared HTTP client construction

pub mod error;
pub mod http;
pub mod net;
pub mod paths;
pub mod store;

pub use error::{Error, Result};
pub use paths::DataDir;
