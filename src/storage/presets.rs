//! Preset repository for JSON storage
//!
//! Keeps saved filter presets in `data/presets.json`, newest first.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::StockroomError;
use crate::models::{FilterPreset, PresetId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable preset file
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct PresetData {
    presets: Vec<FilterPreset>,
}

/// Repository for preset persistence
pub struct PresetRepository {
    path: PathBuf,
    data: RwLock<Vec<FilterPreset>>,
}

impl PresetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load presets from disk
    pub fn load(&self) -> Result<(), StockroomError> {
        let file_data: PresetData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            StockroomError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.presets;
        Ok(())
    }

    /// Save presets to disk
    pub fn save(&self) -> Result<(), StockroomError> {
        let data = self.data.read().map_err(|e| {
            StockroomError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = PresetData {
            presets: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// All presets, newest first
    pub fn get_all(&self) -> Result<Vec<FilterPreset>, StockroomError> {
        let data = self.data.read().map_err(|e| {
            StockroomError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    /// Find a preset by name (case-insensitive), short id (`pre-1a2b3c4d`) or full UUID
    pub fn find(&self, name_or_id: &str) -> Result<Option<FilterPreset>, StockroomError> {
        let data = self.data.read().map_err(|e| {
            StockroomError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        if let Some(preset) = data.iter().find(|p| p.matches_name(name_or_id)) {
            return Ok(Some(preset.clone()));
        }

        Ok(data.iter().find(|p| p.id.matches(name_or_id)).cloned())
    }

    /// Insert a new preset at the front, or update one in place
    pub fn upsert(&self, preset: FilterPreset) -> Result<(), StockroomError> {
        let mut data = self.data.write().map_err(|e| {
            StockroomError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter_mut().find(|p| p.id == preset.id) {
            Some(existing) => *existing = preset,
            None => data.insert(0, preset),
        }
        Ok(())
    }

    /// Replace the whole list, e.g. with a modal manager's session list
    pub fn replace_all(&self, presets: Vec<FilterPreset>) -> Result<(), StockroomError> {
        let mut data = self.data.write().map_err(|e| {
            StockroomError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = presets;
        Ok(())
    }

    /// Delete a preset, returning it if it existed
    pub fn delete(&self, id: PresetId) -> Result<Option<FilterPreset>, StockroomError> {
        let mut data = self.data.write().map_err(|e| {
            StockroomError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let index = data.iter().position(|p| p.id == id);
        Ok(index.map(|i| data.remove(i)))
    }
}
