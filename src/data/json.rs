//! JSON file helpers shared by the repositories.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;

use crate::error::storage::StorageError;

/// Reads and deserializes a JSON document.
///
/// # Returns
/// - `Ok(T)` - Parsed document
/// - `Err(StorageError::Io)` - File missing or unreadable
/// - `Err(StorageError::Json)` - File is not a valid `T`
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let bytes = fs::read(path).await.map_err(|e| io_error(path, e))?;

    serde_json::from_slice(&bytes).map_err(|e| StorageError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Serializes `value` and atomically replaces the file at `path`.
///
/// The document is written to `<path>.tmp` first and then renamed over the
/// target, so a crash mid-write leaves the previous file intact.
pub async fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| io_error(parent, e))?;
    }

    let bytes = serde_json::to_vec_pretty(value).map_err(|e| StorageError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    let tmp_path = tmp_path(path);
    fs::write(&tmp_path, bytes)
        .await
        .map_err(|e| io_error(&tmp_path, e))?;
    fs::rename(&tmp_path, path)
        .await
        .map_err(|e| io_error(path, e))?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}
