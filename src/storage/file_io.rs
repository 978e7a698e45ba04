//! File I/O utilities with atomic writes
//!
//! Provides file operations that leave the previous contents in place when a
//! write fails part way.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Read JSON from a file, returning a default value if the file doesn't exist
pub fn read_json<T, P>(path: P) -> LedgerResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| LedgerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> LedgerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    if let Err(e) = serde_json::to_writer_pretty(&mut writer, data) {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Sample {
        entries: Vec<String>,
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let data: Sample = read_json(&path).unwrap();
        assert_eq!(data, Sample::default());
    }

    #[test]
    fn test_read_invalid_json_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<Sample, _>(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        let data = Sample {
            entries: vec!["coffee".into()],
        };

        write_json_atomic(&path, &data).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("ledger.json.tmp").exists());
        assert_eq!(read_json::<Sample, _>(&path).unwrap(), data);
    }

    #[test]
    fn test_unserializable_data_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        let mut data = std::collections::BTreeMap::new();
        data.insert((1, 2), "tuple keys are not JSON");

        let err = write_json_atomic(&path, &data).unwrap_err();

        assert!(matches!(err, LedgerError::Json(_)));
        assert!(!path.exists());
        assert!(!temp_dir.path().join("ledger.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("ledger.json");

        write_json_atomic(&path, &Sample::default()).unwrap();
        assert!(path.exists());
    }
}
