//! Outbound connectivity probe
//!
//! A single TCP reachability check run at session start. Later network
//! failures surface as ordinary fetch errors; the probe is not repeated
//! per request.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpStream;

use crate::error::{Error, Result};

/// Well-known public resolver used for the reachability probe
const PROBE_ADDR: &str = "8.8.8.8:53";

/// Upper bound on how long the probe may take
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Verify outbound network reachability.
///
/// Opens a TCP connection to a well-known public DNS server and discards
/// it. Fails with the offline error variant wrapping the underlying cause
/// if the connection cannot be established within the timeout.
pub async fn ensure_online() -> Result<()> {
    let addr = PROBE_ADDR.parse().expect("probe address is valid");
    probe(addr).await
}

/// Probe a specific address. Split out so tests can aim at a local socket.
pub async fn probe(addr: SocketAddr) -> Result<()> {
    match tokio::time::timeout(PROBE_TIMEOUT, TcpStream::connect(addr)).await {
        Ok(Ok(_stream)) => Ok(()),
        Ok(Err(err)) => Err(Error::offline(err)),
        Err(_elapsed) => Err(Error::offline(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("connection to {addr} timed out"),
        ))),
    }
}
