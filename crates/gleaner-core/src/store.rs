//! Flat-file JSON persistence
//!
//! Catalog state lives on disk as pretty-printed JSON documents. Reads are
//! tolerant by default: a missing or corrupted file yields the document
//! type's default value so first runs and damaged state take the same path.
//! Strict mode surfaces the failure instead, which the doctor command uses
//! to report corruption.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Read a JSON document from `path`.
///
/// When `strict` is false, a missing or unparsable file yields
/// `T::default()`. When `strict` is true the failure is reported as a
/// storage error describing the cause.
pub fn read_json<T>(path: &Path, strict: bool) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if strict => return Err(Error::storage(path, err.to_string())),
        Err(err) => {
            debug!("State file {} unreadable ({}), starting empty", path.display(), err);
            return Ok(T::default());
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(err) if strict => Err(Error::storage(path, err.to_string())),
        Err(err) => {
            debug!("State file {} unparsable ({}), starting empty", path.display(), err);
            Ok(T::default())
        }
    }
}

/// Serialize `data` to `path` as pretty-printed JSON, creating parent
/// directories as needed. An existing file is overwritten.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let body =
        serde_json::to_string_pretty(data).map_err(|err| Error::storage(path, err.to_string()))?;
    fs::write(path, body)?;
    Ok(())
}
