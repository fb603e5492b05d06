//! Storage layer for Stockroom
//!
//! JSON file storage with atomic writes and automatic directory creation,
//! plus the audit log that records changes to stored data.

pub mod file_io;
pub mod presets;

pub use file_io::{read_json, write_json_atomic};
pub use presets::PresetRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::StockroomPaths;
use crate::error::StockroomError;

/// Access to every persisted repository
pub struct Storage {
    paths: StockroomPaths,
    audit: Option<AuditLogger>,
    pub presets: PresetRepository,
}

impl Storage {
    /// Create a storage handle, creating the data directories if needed
    pub fn new(paths: StockroomPaths) -> Result<Self, StockroomError> {
        paths.ensure_directories()?;

        Ok(Self {
            presets: PresetRepository::new(paths.presets_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn audit logging off (settings `audit_enabled = false`)
    pub fn without_audit(mut self) -> Self {
        self.audit = None;
        self
    }

    pub fn paths(&self) -> &StockroomPaths {
        &self.paths
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), StockroomError> {
        self.presets.load()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), StockroomError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(
                entity_type,
                entity_id,
                entity_name,
                entity,
            )),
            None => Ok(()),
        }
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), StockroomError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::delete(
                entity_type,
                entity_id,
                entity_name,
                entity,
            )),
            None => Ok(()),
        }
    }

    pub fn log_export<T: Serialize>(
        &self,
        export_id: impl Into<String>,
        file_name: impl Into<String>,
        details: &T,
    ) -> Result<(), StockroomError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::export(export_id, file_name, details)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_storage(temp_dir: &TempDir) -> Storage {
        let paths = StockroomPaths::with_base_dir(temp_dir.path().join("stockroom"));
        Storage::new(paths).unwrap()
    }

    #[test]
    fn test_storage_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = create_storage(&temp_dir);

        assert!(storage.paths().data_dir().exists());
        storage.load_all().unwrap();
        storage.presets.save().unwrap();
        assert!(storage.paths().presets_file().exists());
    }

    #[test]
    fn test_log_helpers_append_entries() {
        let temp_dir = TempDir::new().unwrap();
        let storage = create_storage(&temp_dir);

        storage
            .log_create(EntityType::Preset, "pre-1", Some("North".into()), &json!({}))
            .unwrap();
        storage.log_export("exp-1", "north.csv", &json!({"rows": 3})).unwrap();

        let entries = storage.audit_logger().unwrap().read_all().unwrap();
        let ops: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Export]);
    }

    #[test]
    fn test_disabled_audit_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let storage = create_storage(&temp_dir).without_audit();

        storage
            .log_delete(EntityType::Preset, "pre-1", None, &json!({}))
            .unwrap();
        assert!(!storage.paths().audit_log().exists());
    }
}
