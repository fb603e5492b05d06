//! Report modals
//!
//! The preset and export dialogs that sit on top of a report view. Both report
//! their results through a `NotificationSink` owned by the host.

pub mod export;
pub mod preset;

pub use export::{generate_file_name, ExportForm, ExportManager, ExportOutcome};
pub use preset::{PresetField, PresetForm, PresetManager, PresetModalState};

use crate::config::Settings;
use crate::export::ExportEngine;
use crate::models::FilterPreset;

/// The preset and export modals of one report screen
#[derive(Default)]
pub struct ReportModals {
    pub presets: PresetManager,
    pub export: ExportManager,
}

impl ReportModals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the preset list and configure the export flow from settings
    pub fn from_settings(
        settings: &Settings,
        presets: Vec<FilterPreset>,
        engine: Box<dyn ExportEngine>,
    ) -> Self {
        Self {
            presets: PresetManager::with_presets(presets),
            export: ExportManager::from_settings(settings, engine),
        }
    }
}
