//! Preset display formatting

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::catalog;
use crate::models::FilterPreset;

fn flags(preset: &FilterPreset) -> String {
    let mut flags = Vec::new();
    if preset.is_default {
        flags.push("default");
    }
    if preset.is_shared {
        flags.push("shared");
    }
    flags.join(", ")
}

/// Format presets as a table, newest first
pub fn format_preset_list(presets: &[FilterPreset]) -> String {
    if presets.is_empty() {
        return "No presets saved.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Id", "Name", "Filters", "Flags", "Created"]);
    for preset in presets {
        builder.push_record([
            preset.id.to_string(),
            preset.name.clone(),
            preset.filters.len().to_string(),
            flags(preset),
            preset.created_at.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Format a single preset with its filter snapshot
pub fn format_preset_details(preset: &FilterPreset) -> String {
    let mut output = String::new();

    output.push_str(&format!("Preset: {}\n", preset.name));
    output.push_str(&format!("  ID:          {}\n", preset.id));
    output.push_str(&format!("  Description: {}\n", preset.description));
    output.push_str(&format!(
        "  Created:     {} by {}\n",
        preset.created_at, preset.created_by
    ));
    output.push_str(&format!(
        "  Default:     {}\n",
        if preset.is_default { "Yes" } else { "No" }
    ));
    output.push_str(&format!(
        "  Shared:      {}\n",
        if preset.is_shared { "Yes" } else { "No" }
    ));
    output.push_str("  Filters:\n");
    for (id, value) in preset.filters.iter() {
        let label = catalog::find_filter(id).map(|f| f.label).unwrap_or(id);
        output.push_str(&format!("    {}: {}\n", label, value));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActiveFilters, FilterValue};
    use chrono::NaiveDate;

    fn preset() -> FilterPreset {
        let filters = ActiveFilters::new()
            .with("vendor", FilterValue::Select("Apex Traders".into()));
        let mut preset = FilterPreset::new(
            "Apex Orders",
            "",
            filters,
            NaiveDate::from_ymd_opt(2026, 1, 9).unwrap(),
        );
        preset.is_shared = true;
        preset
    }

    #[test]
    fn test_preset_list() {
        assert_eq!(format_preset_list(&[]), "No presets saved.");
        let output = format_preset_list(&[preset()]);
        assert!(output.contains("Apex Orders"));
        assert!(output.contains("shared"));
        assert!(output.contains("2026-01-09"));
    }

    #[test]
    fn test_preset_details() {
        let output = format_preset_details(&preset());
        assert!(output.contains("Description: No description"));
        assert!(output.contains("Vendor: Apex Traders"));
        assert!(output.contains("Shared:      Yes"));
    }
}
