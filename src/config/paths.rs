//! Path management for Stockroom
//!
//! Provides XDG-compliant path resolution for configuration, presets,
//! exports and the audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `STOCKROOM_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/stockroom` or `~/.config/stockroom`
//! 3. Windows: `%APPDATA%\stockroom`

use std::path::PathBuf;

use crate::error::StockroomError;

/// Manages all paths used by Stockroom
#[derive(Debug, Clone)]
pub struct StockroomPaths {
    /// Base directory for all Stockroom data
    base_dir: PathBuf,
}

impl StockroomPaths {
    /// Create a new StockroomPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StockroomError> {
        let base_dir = if let Ok(custom) = std::env::var("STOCKROOM_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create StockroomPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/stockroom/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/stockroom/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default export directory (~/.config/stockroom/exports/)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to presets.json
    pub fn presets_file(&self) -> PathBuf {
        self.data_dir().join("presets.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), StockroomError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| StockroomError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| StockroomError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, StockroomError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("stockroom"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| StockroomError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("stockroom"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, StockroomError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| StockroomError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("stockroom"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StockroomPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StockroomPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StockroomPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(
            paths.presets_file(),
            temp_dir.path().join("data").join("presets.json")
        );
    }
}
