//! Source-archive download with streaming digest
//!
//! The remote archive is streamed to `<dest>/<name>.tar.gz` chunk by
//! chunk, never buffered whole, and hashed as it is written so the
//! observed digest comes for free with the download. Transport failures
//! propagate as-is; a truncated file may remain on disk for the caller to
//! inspect or overwrite on the next attempt.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use gleaner_core::{http, Error, Result};
use gleaner_index::PackageRecord;

/// Result of a completed download
#[derive(Debug)]
pub struct FetchedArchive {
    /// Path of the written archive
    pub archive_path: PathBuf,

    /// Bytes written
    pub size_bytes: u64,

    /// SHA-256 observed while streaming, formatted `sha256=<hex>`
    pub observed_digest: String,
}

/// Streaming downloader for resolved source archives
pub struct SourceFetcher {
    client: reqwest::Client,
    show_progress: bool,
}

impl SourceFetcher {
    /// Create a fetcher with the shared client configuration
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: http::build_client()?,
            show_progress: true,
        })
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Download `name`'s resolved source archive into `dest_dir`.
    ///
    /// Requires a previously resolved source link on the record; fails
    /// with the link-missing variant otherwise. An existing file of the
    /// same name is overwritten. On success the record's archive path is
    /// set; the observed digest is compared against the resolved one and
    /// a mismatch is logged, not fatal.
    pub async fn fetch_source(
        &self,
        name: &str,
        record: &mut PackageRecord,
        dest_dir: &Path,
    ) -> Result<FetchedArchive> {
        let link = record
            .source_link
            .clone()
            .ok_or_else(|| Error::link_missing(name))?;

        let response = self.client.get(&link).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::status(&link, status.as_u16()));
        }

        fs::create_dir_all(dest_dir)?;
        let archive_path = dest_dir.join(format!("{name}.tar.gz"));

        let progress = if self.show_progress {
            let pb = ProgressBar::new(response.content_length().unwrap_or(0));
            pb.set_style(
                ProgressStyle::with_template(
                    "{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})",
                )
                .expect("progress template is valid")
                .progress_chars("#>-"),
            );
            pb.set_message(format!("Downloading {name}"));
            Some(pb)
        } else {
            None
        };

        let mut file = File::create(&archive_path)?;
        let mut hasher = Sha256::new();
        let mut written: u64 = 0;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk: bytes::Bytes = chunk?;
            file.write_all(&chunk)?;
            hasher.update(&chunk);
            written += chunk.len() as u64;

            if let Some(pb) = &progress {
                pb.set_position(written);
            }
        }
        file.flush()?;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        let observed_digest = format!("sha256={}", hex::encode(hasher.finalize()));
        if let Some(expected) = record.digest.as_deref() {
            if expected.starts_with("sha256=") && expected != observed_digest {
                warn!(
                    "Digest mismatch for {name}: index lists {expected}, stream was {observed_digest}"
                );
            }
        }

        record.archive_path = Some(archive_path.clone());
        debug!("Wrote {written} bytes to {}", archive_path.display());

        Ok(FetchedArchive {
            archive_path,
            size_bytes: written,
            observed_digest,
        })
    }
}
