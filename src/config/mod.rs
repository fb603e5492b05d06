//! Configuration module for Stockroom
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Report and export defaults

pub mod paths;
pub mod settings;

pub use paths::StockroomPaths;
pub use settings::Settings;
