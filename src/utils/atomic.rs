//! Atomic snapshot writes
//!
//! Whole-document snapshots are written to a sibling `.tmp` file, synced,
//! then renamed over the destination. The previous snapshot is kept as a
//! `.bak` sibling so a bad write can be recovered by hand.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Result type for atomic operations
pub type AtomicResult<T> = Result<T, AtomicError>;

/// Errors that can occur during atomic operations
#[derive(Debug, thiserror::Error)]
pub enum AtomicError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Path of the temp file used while writing `path`
pub fn temp_path(path: &Path) -> PathBuf {
    path.with_extension("tmp")
}

/// Path of the backup kept for `path`
pub fn backup_path(path: &Path) -> PathBuf {
    path.with_extension("bak")
}

/// Atomically write content to a file, creating parent directories
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> AtomicResult<()> {
    let path = path.as_ref();
    let temp = temp_path(path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(&temp)?;
    file.write_all(content)?;
    file.sync_all()?;

    fs::rename(&temp, path)?;
    Ok(())
}

/// Serialize `value` as pretty JSON and write it atomically, moving any
/// existing document to the backup path first
pub fn write_json_snapshot<P, T>(path: P, value: &T) -> AtomicResult<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let path = path.as_ref();
    let mut content = serde_json::to_vec_pretty(value)?;
    content.push(b'\n');

    if path.exists() {
        fs::copy(path, backup_path(path))?;
    }

    atomic_write(path, &content)
}

/// Remove a temp file left behind by an interrupted write
///
/// Returns true if one was found and removed.
pub fn cleanup_temp_file<P: AsRef<Path>>(path: P) -> AtomicResult<bool> {
    let temp = temp_path(path.as_ref());
    if !temp.exists() {
        return Ok(false);
    }
    fs::remove_file(&temp)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        atomic_write(&path, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("state.json");

        atomic_write(&path, b"nested").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_snapshot_keeps_backup() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        write_json_snapshot(&path, &json!({"version": 1})).unwrap();
        assert!(!backup_path(&path).exists());

        write_json_snapshot(&path, &json!({"version": 2})).unwrap();

        let current: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let backup: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(backup_path(&path)).unwrap()).unwrap();
        assert_eq!(current["version"], 2);
        assert_eq!(backup["version"], 1);
    }

    #[test]
    fn test_cleanup_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        assert!(!cleanup_temp_file(&path).unwrap());

        fs::write(temp_path(&path), "partial").unwrap();
        assert!(cleanup_temp_file(&path).unwrap());
        assert!(!temp_path(&path).exists());
    }
}
