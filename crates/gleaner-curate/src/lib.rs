//! # gleaner-curate
//!
//! The curation session and its batch drivers: resolve links for the whole
//! catalog, fetch every resolved archive, collect metadata documents, and
//! sample uncommon packages for build-script mining. Everything runs
//! sequentially with a fixed inter-iteration delay.

pub mod drivers;
pub mod sample;
pub mod session;

pub use drivers::{fetch_all_metadata, fetch_all_sources, resolve_all_links};
pub use sample::{sample_uncommon, SampleReport};
pub use session::Session;
