//! JSON file helpers
//!
//! Writes go through a temporary sibling file that is renamed over the
//! target, so a crash mid-write leaves the previous file intact.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FoyerError;

/// Read a JSON file, falling back to `T::default()` when it does not exist
pub fn read_json_or_default<T, P>(path: P) -> Result<T, FoyerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.exists() {
        read_json_required(path)
    } else {
        Ok(T::default())
    }
}

/// Read a JSON file that must exist
pub fn read_json_required<T, P>(path: P) -> Result<T, FoyerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            FoyerError::Storage(format!("File not found: {}", path.display()))
        }
        _ => FoyerError::Storage(format!("Failed to read {}: {}", path.display(), e)),
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        FoyerError::Storage(format!(
            "Failed to parse {} (line {}, column {}): {}",
            path.display(),
            e.line(),
            e.column(),
            e
        ))
    })
}

/// Serialize `data` as pretty JSON and atomically replace `path` with it
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FoyerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| FoyerError::Storage(format!("Failed to serialize {}: {}", path.display(), e)))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            FoyerError::Storage(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let temp_path = temp_path_for(path);
    let result = write_and_sync(&temp_path, &bytes).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| {
            FoyerError::Storage(format!("Failed to replace {}: {}", path.display(), e))
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

// Same directory as the target so the rename stays on one filesystem
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> Result<(), FoyerError> {
    let mut file = fs::File::create(path)
        .map_err(|e| FoyerError::Storage(format!("Failed to create {}: {}", path.display(), e)))?;
    file.write_all(bytes)
        .and_then(|()| file.write_all(b"\n"))
        .and_then(|()| file.sync_all())
        .map_err(|e| FoyerError::Storage(format!("Failed to write {}: {}", path.display(), e)))
}
