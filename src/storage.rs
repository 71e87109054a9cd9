// JSON file persistence shared by the answer, shortcut and preferences stores
// Writes go through a temp file + sync + rename so a crash never leaves half a file

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub(crate) enum StorageError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write: {0}")]
    Write(#[from] std::io::Error),
}

/// Read and parse a JSON file; a missing file yields `Ok(None)`
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let value = serde_json::from_str(&content).map_err(|source| StorageError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    Ok(Some(value))
}

/// Serialize `value` as pretty JSON and atomically replace `path`
pub(crate) fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    let temp_path = path.with_extension("tmp");

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StorageError::Write(e)
    })?;

    Ok(())
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
