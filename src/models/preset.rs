//! Filter preset model
//!
//! A preset is a named snapshot of the active filter selection that can be
//! re-applied later. Name and description rules live here so the preset form
//! and the CLI share one validator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::filter::ActiveFilters;
use super::ids::PresetId;

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 50;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// Stored in place of an empty description
pub const NO_DESCRIPTION: &str = "No description";

/// Creator recorded on presets until real user accounts exist
pub const DEFAULT_CREATOR: &str = "Current User";

/// A saved filter preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPreset {
    /// Unique identifier
    pub id: PresetId,

    /// Unique display name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Filters captured at save time
    pub filters: ActiveFilters,

    /// Whether the user marked this as their default preset
    #[serde(default)]
    pub is_default: bool,

    /// Whether the preset is visible to other users
    #[serde(default)]
    pub is_shared: bool,

    /// Who created the preset
    pub created_by: String,

    /// Creation date
    pub created_at: NaiveDate,
}

impl FilterPreset {
    /// Create a new preset from already-validated input
    pub fn new(
        name: &str,
        description: &str,
        filters: ActiveFilters,
        created_at: NaiveDate,
    ) -> Self {
        let description = description.trim();
        Self {
            id: PresetId::new(),
            name: name.trim().to_string(),
            description: if description.is_empty() {
                NO_DESCRIPTION.to_string()
            } else {
                description.to_string()
            },
            filters,
            is_default: false,
            is_shared: false,
            created_by: DEFAULT_CREATOR.to_string(),
            created_at,
        }
    }

    /// Check if this preset's name matches (case-insensitive, trimmed)
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

impl fmt::Display for FilterPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for preset form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetValidationError {
    NameRequired,
    NameTooShort(usize),
    NameTooLong(usize),
    NameInvalidCharacters,
    DuplicateName(String),
    DescriptionTooShort(usize),
    DescriptionTooLong(usize),
}

impl fmt::Display for PresetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => write!(f, "Preset name is required"),
            Self::NameTooShort(len) => write!(
                f,
                "Preset name must be at least {} characters ({} given)",
                NAME_MIN_LEN, len
            ),
            Self::NameTooLong(len) => write!(
                f,
                "Preset name must not exceed {} characters ({} given)",
                NAME_MAX_LEN, len
            ),
            Self::NameInvalidCharacters => write!(
                f,
                "Preset name can only contain letters, numbers, spaces and hyphens"
            ),
            Self::DuplicateName(name) => {
                write!(f, "A preset named '{}' already exists", name)
            }
            Self::DescriptionTooShort(len) => write!(
                f,
                "Description must be at least {} characters if provided ({} given)",
                DESCRIPTION_MIN_LEN, len
            ),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description must not exceed {} characters ({} given)",
                DESCRIPTION_MAX_LEN, len
            ),
        }
    }
}

impl std::error::Error for PresetValidationError {}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == ' ' || c == '-'
}

/// Clean raw keyboard input for the name field
///
/// Drops characters outside letters/digits/spaces/hyphens and collapses runs
/// of spaces into one. Leading/trailing whitespace is kept so typing is not
/// disturbed; it is trimmed at validation and save time.
pub fn sanitize_name_input(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = false;
    for c in raw.chars().filter(|c| is_name_char(*c)) {
        if c == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(c);
    }
    out
}

/// Validate a preset name against the rules and the existing presets
pub fn validate_name(name: &str, existing: &[FilterPreset]) -> Result<(), PresetValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PresetValidationError::NameRequired);
    }

    if !trimmed.chars().all(is_name_char) {
        return Err(PresetValidationError::NameInvalidCharacters);
    }

    let len = trimmed.chars().count();
    if len < NAME_MIN_LEN {
        return Err(PresetValidationError::NameTooShort(len));
    }
    if len > NAME_MAX_LEN {
        return Err(PresetValidationError::NameTooLong(len));
    }

    if let Some(clash) = existing.iter().find(|p| p.matches_name(trimmed)) {
        return Err(PresetValidationError::DuplicateName(clash.name.clone()));
    }

    Ok(())
}

/// Validate an optional preset description
pub fn validate_description(description: &str) -> Result<(), PresetValidationError> {
    let len = description.trim().chars().count();
    if len == 0 {
        return Ok(());
    }
    if len < DESCRIPTION_MIN_LEN {
        return Err(PresetValidationError::DescriptionTooShort(len));
    }
    if len > DESCRIPTION_MAX_LEN {
        return Err(PresetValidationError::DescriptionTooLong(len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilterValue;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_new_preset_trims_and_defaults_description() {
        let preset = FilterPreset::new("  Low Stock  ", "   ", ActiveFilters::new(), today());
        assert_eq!(preset.name, "Low Stock");
        assert_eq!(preset.description, NO_DESCRIPTION);
        assert_eq!(preset.created_by, DEFAULT_CREATOR);
        assert!(!preset.is_default);
    }

    #[test]
    fn test_sanitize_name_input() {
        assert_eq!(sanitize_name_input("Q1 #Report!"), "Q1 Report");
        assert_eq!(sanitize_name_input("Weekly    stock   check"), "Weekly stock check");
        assert_eq!(sanitize_name_input("north-east_zone"), "north-eastzone");
    }

    #[test]
    fn test_validate_name_lengths() {
        assert_eq!(validate_name("", &[]), Err(PresetValidationError::NameRequired));
        assert_eq!(validate_name("   ", &[]), Err(PresetValidationError::NameRequired));
        assert_eq!(validate_name("ab", &[]), Err(PresetValidationError::NameTooShort(2)));
        assert_eq!(
            validate_name(&"a".repeat(51), &[]),
            Err(PresetValidationError::NameTooLong(51))
        );
        assert!(validate_name("abc", &[]).is_ok());
        assert!(validate_name(&"a".repeat(50), &[]).is_ok());
    }

    #[test]
    fn test_validate_name_rejects_symbols() {
        assert_eq!(
            validate_name("Q1/Q2 stock", &[]),
            Err(PresetValidationError::NameInvalidCharacters)
        );
    }

    #[test]
    fn test_validate_name_duplicate_is_case_insensitive() {
        let filters =
            ActiveFilters::new().with("category", FilterValue::Select("Electronics".into()));
        let existing = vec![FilterPreset::new("Monthly", "", filters, today())];

        assert_eq!(
            validate_name("monthly", &existing),
            Err(PresetValidationError::DuplicateName("Monthly".into()))
        );
        assert!(validate_name("Monthly Review", &existing).is_ok());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("").is_ok());
        assert!(validate_description("   ").is_ok());
        assert_eq!(
            validate_description("too short"),
            Err(PresetValidationError::DescriptionTooShort(9))
        );
        assert!(validate_description("Ten chars!").is_ok());
        assert_eq!(
            validate_description(&"x".repeat(201)),
            Err(PresetValidationError::DescriptionTooLong(201))
        );
    }

    #[test]
    fn test_serialization() {
        let filters =
            ActiveFilters::new().with("stockStatus", FilterValue::Select("Low Stock".into()));
        let preset = FilterPreset::new("Low Stock", "Items below reorder level", filters, today());

        let json = serde_json::to_string(&preset).unwrap();
        let back: FilterPreset = serde_json::from_str(&json).unwrap();
        assert_eq!(preset, back);
    }
}
