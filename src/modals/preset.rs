//! Filter preset modal
//!
//! Holds the in-session preset list, the save form with its touched/error
//! state, and the staged delete confirmation.

use chrono::{Local, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{StockroomError, StockroomResult};
use crate::models::preset::{sanitize_name_input, validate_description, validate_name};
use crate::models::{ActiveFilters, FilterPreset, PresetId, PresetValidationError};
use crate::notify::{Notification, NotificationSink};

/// Lifecycle of the preset modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresetModalState {
    #[default]
    Closed,
    Editing,
    Submitting,
}

/// Validated fields of the preset form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PresetField {
    Name,
    Description,
}

/// Input state of the "save preset" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetForm {
    pub name: String,
    pub description: String,
    pub is_default: bool,
    pub is_shared: bool,
    touched: BTreeSet<PresetField>,
    errors: BTreeMap<PresetField, PresetValidationError>,
}

impl PresetForm {
    pub fn is_touched(&self, field: PresetField) -> bool {
        self.touched.contains(&field)
    }

    pub fn error(&self, field: PresetField) -> Option<&PresetValidationError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> impl Iterator<Item = (PresetField, &PresetValidationError)> {
        self.errors.iter().map(|(field, err)| (*field, err))
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn validate_field(&mut self, field: PresetField, existing: &[FilterPreset]) {
        let result = match field {
            PresetField::Name => validate_name(&self.name, existing),
            PresetField::Description => validate_description(&self.description),
        };
        match result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err);
            }
        }
    }

    fn validate_all(&mut self, existing: &[FilterPreset]) -> bool {
        for field in [PresetField::Name, PresetField::Description] {
            self.touched.insert(field);
            self.validate_field(field, existing);
        }
        !self.has_errors()
    }
}

/// Preset list plus the save and delete flows
#[derive(Debug, Default)]
pub struct PresetManager {
    state: PresetModalState,
    form: PresetForm,
    presets: Vec<FilterPreset>,
    pending_delete: Option<PresetId>,
}

impl PresetManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from presets loaded by the host, newest first
    pub fn with_presets(presets: Vec<FilterPreset>) -> Self {
        Self {
            presets,
            ..Self::default()
        }
    }

    pub fn presets(&self) -> &[FilterPreset] {
        &self.presets
    }

    pub fn state(&self) -> PresetModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != PresetModalState::Closed
    }

    pub fn form(&self) -> &PresetForm {
        &self.form
    }

    pub fn open(&mut self) {
        self.state = PresetModalState::Editing;
    }

    /// Close the modal and discard the form
    pub fn close(&mut self) {
        self.state = PresetModalState::Closed;
        self.form = PresetForm::default();
    }

    /// Update the name as typed; disallowed characters are dropped
    pub fn set_name(&mut self, raw: &str) {
        self.form.name = sanitize_name_input(raw);
        if self.form.is_touched(PresetField::Name) {
            self.form.validate_field(PresetField::Name, &self.presets);
        }
    }

    pub fn set_description(&mut self, description: &str) {
        self.form.description = description.to_string();
        if self.form.is_touched(PresetField::Description) {
            self.form
                .validate_field(PresetField::Description, &self.presets);
        }
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.form.is_default = is_default;
    }

    pub fn set_shared(&mut self, is_shared: bool) {
        self.form.is_shared = is_shared;
    }

    /// Mark a field as visited and validate it
    pub fn blur(&mut self, field: PresetField) {
        self.form.touched.insert(field);
        self.form.validate_field(field, &self.presets);
    }

    /// Save the active filters as a new preset dated today
    pub fn save_preset(
        &mut self,
        filters: &ActiveFilters,
        sink: &mut dyn NotificationSink,
    ) -> StockroomResult<FilterPreset> {
        self.save_preset_on(filters, Local::now().date_naive(), sink)
    }

    /// Save the active filters as a new preset created on `today`
    pub fn save_preset_on(
        &mut self,
        filters: &ActiveFilters,
        today: NaiveDate,
        sink: &mut dyn NotificationSink,
    ) -> StockroomResult<FilterPreset> {
        self.state = PresetModalState::Submitting;

        if !self.form.validate_all(&self.presets) {
            self.state = PresetModalState::Editing;
            let message = self
                .form
                .errors()
                .map(|(_, err)| err.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            sink.notify(Notification::error(
                "Validation Error",
                "Please fix the errors in the form before saving",
            ));
            return Err(StockroomError::Validation(message));
        }

        if filters.is_empty() {
            self.state = PresetModalState::Editing;
            sink.notify(Notification::warning(
                "No Filters",
                "There are no filters to save. Apply at least one filter first.",
            ));
            return Err(StockroomError::Precondition(
                "No filters to save".to_string(),
            ));
        }

        let mut preset = FilterPreset::new(
            &self.form.name,
            &self.form.description,
            filters.clone(),
            today,
        );
        preset.is_default = self.form.is_default;
        preset.is_shared = self.form.is_shared;

        self.presets.insert(0, preset.clone());
        sink.notify(Notification::success(
            "Preset Saved",
            format!("Filter preset \"{}\" has been saved", preset.name),
        ));
        self.close();

        Ok(preset)
    }

    /// Look up a preset and return its filter snapshot for the host to apply
    pub fn load_preset(
        &mut self,
        id: PresetId,
        sink: &mut dyn NotificationSink,
    ) -> StockroomResult<ActiveFilters> {
        let preset = match self.presets.iter().find(|p| p.id == id) {
            Some(preset) => preset,
            None => {
                sink.notify(Notification::error(
                    "Preset Not Found",
                    "The selected preset no longer exists",
                ));
                return Err(StockroomError::preset_not_found(id.to_string()));
            }
        };

        let filters = preset.filters.clone();
        sink.notify(Notification::success(
            "Preset Loaded",
            format!("Filter preset \"{}\" has been applied", preset.name),
        ));
        self.close();
        Ok(filters)
    }

    /// Stage a preset for deletion and open the confirmation
    pub fn request_delete(&mut self, id: PresetId) -> StockroomResult<&FilterPreset> {
        let preset = self
            .presets
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StockroomError::preset_not_found(id.to_string()))?;
        self.pending_delete = Some(id);
        Ok(preset)
    }

    /// The preset waiting for delete confirmation
    pub fn pending_delete(&self) -> Option<&FilterPreset> {
        let id = self.pending_delete?;
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Delete the staged preset
    pub fn confirm_delete(
        &mut self,
        sink: &mut dyn NotificationSink,
    ) -> StockroomResult<FilterPreset> {
        let id = self.pending_delete.take().ok_or_else(|| {
            StockroomError::Precondition("No preset is waiting for deletion".to_string())
        })?;

        let index = self
            .presets
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StockroomError::preset_not_found(id.to_string()))?;
        let removed = self.presets.remove(index);

        sink.notify(Notification::success(
            "Preset Deleted",
            format!("Filter preset \"{}\" has been deleted", removed.name),
        ));
        Ok(removed)
    }

    /// Drop the staged delete without touching the list
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}
