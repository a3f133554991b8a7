//! Build-script extraction
//!
//! Mines `setup.py` members out of a downloaded archive into standalone
//! files, one per match, for later inspection.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::debug;

use gleaner_core::{Error, Result};

/// Distinguished build-script filename
const BUILD_SCRIPT_NAME: &str = "setup.py";

/// Extract every regular, non-empty `setup.py` member of the gzip tar at
/// `archive_path`, writing each as `<output_dir>/<name>-<index>.py` with
/// an incrementing index per match.
///
/// Returns whether at least one member was extracted. Fails with the
/// archive error variant when the archive is missing or unreadable.
pub fn extract_build_scripts(name: &str, archive_path: &Path, output_dir: &Path) -> Result<bool> {
    if !archive_path.is_file() {
        return Err(Error::archive(archive_path, "no such archive"));
    }

    let mut archive = Archive::new(GzDecoder::new(File::open(archive_path)?));
    fs::create_dir_all(output_dir)?;

    let mut extracted = 0usize;
    let entries = archive
        .entries()
        .map_err(|err| Error::archive(archive_path, err.to_string()))?;

    for entry in entries {
        let mut entry = entry.map_err(|err| Error::archive(archive_path, err.to_string()))?;
        if !entry.header().entry_type().is_file() || entry.size() == 0 {
            continue;
        }

        let is_build_script = entry
            .path()
            .map_err(|err| Error::archive(archive_path, err.to_string()))?
            .file_name()
            .is_some_and(|file_name| file_name == BUILD_SCRIPT_NAME);
        if !is_build_script {
            continue;
        }

        let out_path = output_dir.join(format!("{name}-{extracted}.py"));
        let mut out_file = File::create(&out_path)?;
        io::copy(&mut entry, &mut out_file)?;
        debug!("Extracted {}", out_path.display());
        extracted += 1;
    }

    Ok(extracted > 0)
}
