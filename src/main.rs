use anyhow::Result;
use clap::{Parser, Subcommand};

use stockroom::cli::{handle_preset_command, handle_report_command, PresetCommands, ReportCommands};
use stockroom::config::{paths::StockroomPaths, settings::Settings};
use stockroom::storage::Storage;

#[derive(Parser)]
#[command(
    name = "stockroom",
    version,
    about = "Inventory reports: browse, filter, save presets and export",
    long_about = "Stockroom generates inventory, purchasing and sales reports from \
                  synthetic data, lets you search and sort them, save filter \
                  presets and export the visible rows."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report catalog, viewing and export
    #[command(subcommand)]
    Report(ReportCommands),

    /// Saved filter presets
    #[command(subcommand)]
    Preset(PresetCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = StockroomPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    if !settings.audit_enabled {
        storage = storage.without_audit();
    }
    storage.load_all()?;

    match cli.command {
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Preset(cmd)) => handle_preset_command(&storage, &settings, cmd)?,
        Some(Commands::Config) => {
            println!("Stockroom Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Presets file:     {}", paths.presets_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Rows per report:  {}", settings.default_row_count);
            println!("  Export delay:     {} ms", settings.export_delay_ms);
            println!("  Date format:      {}", settings.export_date_format);
            println!("  Number format:    {:?}", settings.export_number_format);
            println!("  Audit enabled:    {}", settings.audit_enabled);
        }
        None => {
            println!("Stockroom - inventory reports");
            println!();
            println!("Run 'stockroom --help' for usage information.");
            println!("Run 'stockroom report list' to see available reports.");
        }
    }

    Ok(())
}
