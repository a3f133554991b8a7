//! Error types for gleaner-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using gleaner-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Gleaner
#[derive(Error, Debug)]
pub enum Error {
    /// Outbound connectivity probe failed at session start
    #[error("No network connectivity: {source}")]
    Offline {
        #[source]
        source: std::io::Error,
    },

    /// Persisted state file unreadable or unparsable in strict mode
    #[error("Unreadable state file {path}: {detail}")]
    Storage { path: PathBuf, detail: String },

    /// Transport-level failure talking to a remote endpoint
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote endpoint answered with a non-success status
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Remote endpoint answered with a body that could not be interpreted
    #[error("Unusable response from {url}: {detail}")]
    Payload { url: String, detail: String },

    /// Download requested for a package with no resolved source link
    #[error("Package '{package}' has no resolved source link")]
    LinkMissing { package: String },

    /// Archive missing, unreadable, or structurally invalid
    #[error("Archive {path}: {detail}")]
    Archive { path: PathBuf, detail: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an offline error from the probe failure
    pub fn offline(source: std::io::Error) -> Self {
        Self::Offline { source }
    }

    /// Create a storage error for a state file
    pub fn storage(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::Storage {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Create an error for a non-success HTTP status
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Create an error for an uninterpretable response body
    pub fn payload(url: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Payload {
            url: url.into(),
            detail: detail.into(),
        }
    }

    /// Create a missing-link error
    pub fn link_missing(package: impl Into<String>) -> Self {
        Self::LinkMissing {
            package: package.into(),
        }
    }

    /// Create an archive error
    pub fn archive(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::Archive {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// True for any failure talking to a remote endpoint
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Status { .. } | Self::Payload { .. }
        )
    }
}
