//! Preset CLI commands
//!
//! Saves, lists, shows and deletes filter presets. Presets live in the
//! preset repository; each command runs the same preset flow the modal uses.

use clap::Subcommand;

use super::apply_filter_args;
use crate::audit::EntityType;
use crate::config::Settings;
use crate::display::{format_preset_details, format_preset_list, ConsoleSink};
use crate::error::{StockroomError, StockroomResult};
use crate::modals::PresetManager;
use crate::models::FilterPreset;
use crate::reports::ReportSession;
use crate::storage::Storage;

/// Preset subcommands
#[derive(Subcommand, Debug)]
pub enum PresetCommands {
    /// List saved presets, newest first
    List,

    /// Save a new preset from filter selections
    Save {
        /// Preset name (letters, digits, spaces, hyphens)
        name: String,

        /// Optional description (10-200 characters)
        #[arg(short, long)]
        description: Option<String>,

        /// Filter selection, e.g. `category=Electronics`
        #[arg(short, long = "filter", value_name = "ID=VALUE")]
        filters: Vec<String>,

        /// Only accept filters that apply to this report
        #[arg(short, long)]
        report: Option<String>,

        /// Mark as the default preset
        #[arg(long)]
        default: bool,

        /// Share with other users
        #[arg(long)]
        shared: bool,
    },

    /// Show a preset's details
    Show {
        /// Preset name or ID
        preset: String,
    },

    /// Delete a preset
    Delete {
        /// Preset name or ID
        preset: String,

        /// Confirm the deletion
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle preset commands
pub fn handle_preset_command(
    storage: &Storage,
    settings: &Settings,
    cmd: PresetCommands,
) -> StockroomResult<()> {
    match cmd {
        PresetCommands::List => {
            println!("{}", format_preset_list(&storage.presets.get_all()?));
            Ok(())
        }
        PresetCommands::Save {
            name,
            description,
            filters,
            report,
            default,
            shared,
        } => {
            let mut session = ReportSession::from_settings(settings, None);
            if let Some(key) = &report {
                session.select_report(key)?;
            }
            apply_filter_args(&mut session, &filters)?;

            let mut manager = PresetManager::with_presets(storage.presets.get_all()?);
            manager.open();
            manager.set_name(&name);
            manager.set_description(description.as_deref().unwrap_or(""));
            manager.set_default(default);
            manager.set_shared(shared);

            let mut sink = ConsoleSink::new();
            let preset = manager.save_preset(session.active_filters(), &mut sink);
            let preset = match preset {
                Ok(preset) => preset,
                Err(err) => {
                    for (_, field_error) in manager.form().errors() {
                        eprintln!("  {}", field_error);
                    }
                    return Err(err);
                }
            };

            storage.presets.upsert(preset.clone())?;
            storage.presets.save()?;
            storage.log_create(
                EntityType::Preset,
                preset.id.full(),
                Some(preset.name.clone()),
                &preset,
            )?;

            println!("ID: {}", preset.id);
            Ok(())
        }
        PresetCommands::Show { preset } => {
            let preset = find_preset(storage, &preset)?;
            print!("{}", format_preset_details(&preset));
            Ok(())
        }
        PresetCommands::Delete { preset, yes } => {
            let preset = find_preset(storage, &preset)?;

            let mut manager = PresetManager::with_presets(storage.presets.get_all()?);
            manager.request_delete(preset.id)?;

            if !yes {
                manager.cancel_delete();
                println!(
                    "Delete preset '{}'? Re-run with --yes to confirm.",
                    preset.name
                );
                return Ok(());
            }

            let mut sink = ConsoleSink::new();
            let removed = manager.confirm_delete(&mut sink)?;

            storage.presets.replace_all(manager.presets().to_vec())?;
            storage.presets.save()?;
            storage.log_delete(
                EntityType::Preset,
                removed.id.full(),
                Some(removed.name.clone()),
                &removed,
            )?;
            Ok(())
        }
    }
}

fn find_preset(storage: &Storage, name_or_id: &str) -> StockroomResult<FilterPreset> {
    storage
        .presets
        .find(name_or_id)?
        .ok_or_else(|| StockroomError::preset_not_found(name_or_id))
}
