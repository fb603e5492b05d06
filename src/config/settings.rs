//! User settings for Stockroom
//!
//! Manages user preferences including the currency symbol used for synthetic
//! report values, default row counts, export defaults and audit logging.

use serde::{Deserialize, Serialize};

use super::paths::StockroomPaths;
use crate::error::StockroomError;
use crate::models::NumberFormat;

/// User settings for Stockroom
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to money values
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of rows generated when a report is loaded
    #[serde(default = "default_row_count")]
    pub default_row_count: usize,

    /// Simulated export latency in milliseconds
    #[serde(default = "default_export_delay_ms")]
    pub export_delay_ms: u64,

    /// Default date pattern offered by the export form
    #[serde(default = "default_export_date_format")]
    pub export_date_format: String,

    /// Default number locale offered by the export form
    #[serde(default)]
    pub export_number_format: NumberFormat,

    /// Whether preset and export activity is written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_row_count() -> usize {
    50
}

fn default_export_delay_ms() -> u64 {
    1500
}

fn default_export_date_format() -> String {
    "DD/MM/YYYY".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_row_count: default_row_count(),
            export_delay_ms: default_export_delay_ms(),
            export_date_format: default_export_date_format(),
            export_number_format: NumberFormat::default(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Simulated export latency as a Duration
    pub fn export_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.export_delay_ms)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &StockroomPaths) -> Result<Self, StockroomError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                StockroomError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                StockroomError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StockroomPaths) -> Result<(), StockroomError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            StockroomError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            StockroomError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
