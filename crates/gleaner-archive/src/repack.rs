//! Source repackaging
//!
//! Copies the Python sources out of a downloaded gzip tar into a smaller
//! xz tar. Member paths and header metadata are preserved exactly as
//! filtered; directory nesting is not rewritten.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tar::{Archive, Builder};
use tracing::debug;
use xz2::write::XzEncoder;

use gleaner_core::{Error, Result};

/// Suffix identifying Python source members
const SOURCE_SUFFIX: &str = ".py";

/// Upper bound on copied member size (50 MB, decimal)
const MAX_MEMBER_SIZE: u64 = 50_000_000;

/// Compression level for the produced xz stream
const XZ_LEVEL: u32 = 6;

/// Summary of a repackaging run
#[derive(Debug)]
pub struct RepackSummary {
    /// Path of the produced archive
    pub output_path: PathBuf,

    /// Number of members copied into it
    pub member_count: usize,
}

/// Repackage the Python sources of the gzip tar at `input` into
/// `<output_dir>/<name>.tar.xz`.
///
/// A member is copied when it is a regular file whose path ends in `.py`
/// and whose size is strictly between 0 and 50,000,000 bytes. Fails with
/// the archive error variant when `input` does not exist or is not a
/// readable gzip tar.
pub fn repack_sources(input: &Path, output_dir: &Path, name: &str) -> Result<RepackSummary> {
    if !input.is_file() {
        return Err(Error::archive(input, "no such archive"));
    }

    let mut archive = Archive::new(GzDecoder::new(File::open(input)?));

    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(format!("{name}.tar.xz"));
    let mut builder = Builder::new(XzEncoder::new(File::create(&output_path)?, XZ_LEVEL));

    let mut member_count = 0;
    let entries = archive
        .entries()
        .map_err(|err| Error::archive(input, err.to_string()))?;

    for entry in entries {
        let mut entry = entry.map_err(|err| Error::archive(input, err.to_string()))?;
        if !entry.header().entry_type().is_file() {
            continue;
        }

        let size = entry.size();
        if size == 0 || size >= MAX_MEMBER_SIZE {
            continue;
        }

        let path = entry
            .path()
            .map_err(|err| Error::archive(input, err.to_string()))?
            .into_owned();
        if !path.to_string_lossy().ends_with(SOURCE_SUFFIX) {
            continue;
        }

        let mut header = entry.header().clone();
        header.set_size(size);
        builder
            .append_data(&mut header, &path, &mut entry)
            .map_err(|err| Error::archive(input, err.to_string()))?;
        member_count += 1;
    }

    // Finish the tar stream, then the xz stream, before the file closes.
    let encoder = builder
        .into_inner()
        .map_err(|err| Error::archive(&output_path, err.to_string()))?;
    encoder
        .finish()
        .map_err(|err| Error::archive(&output_path, err.to_string()))?;

    debug!(
        "Repackaged {member_count} source members into {}",
        output_path.display()
    );

    Ok(RepackSummary {
        output_path,
        member_count,
    })
}
