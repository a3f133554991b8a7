//! Shared HTTP client construction

use std::time::Duration;

use crate::error::Result;

/// Request timeout applied to every catalog and download request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent reported to the index
const USER_AGENT: &str = concat!("gleaner/", env!("CARGO_PKG_VERSION"));

/// Build the reqwest client shared by catalog and download operations.
pub fn build_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}
