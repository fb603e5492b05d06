//! JSON file helpers with atomic writes
//!
//! A write either replaces the whole file or leaves the old one untouched.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StockroomError;

/// Read JSON from a file, falling back to `T::default()` when it is missing
pub fn read_json<T, P>(path: P) -> Result<T, StockroomError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| {
        StockroomError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        StockroomError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write JSON to `<path>.tmp`, sync it, then rename over `path`
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), StockroomError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            StockroomError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| StockroomError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| StockroomError::Storage(format!("Failed to serialize data: {}", e)))?;
    writer
        .flush()
        .map_err(|e| StockroomError::Storage(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| StockroomError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StockroomError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Shelf {
        label: String,
        bins: u32,
    }

    #[test]
    fn test_missing_file_reads_default() {
        let temp_dir = TempDir::new().unwrap();
        let shelf: Shelf = read_json(temp_dir.path().join("missing.json")).unwrap();
        assert_eq!(shelf, Shelf::default());
    }

    #[test]
    fn test_atomic_write_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("shelf.json");
        let shelf = Shelf {
            label: "A-12".into(),
            bins: 8,
        };

        write_json_atomic(&path, &shelf).unwrap();

        assert!(!temp_dir.path().join("nested").join("shelf.json.tmp").exists());
        assert_eq!(read_json::<Shelf, _>(&path).unwrap(), shelf);
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shelf.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json::<Shelf, _>(&path).unwrap_err();
        assert!(matches!(err, StockroomError::Storage(_)));
    }
}
