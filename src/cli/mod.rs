//! CLI command handlers
//!
//! Bridges clap argument parsing with the report session and the modal
//! flows. The CLI plays the host: it picks the report, prints tables and
//! notifications, and waits out the export delay.

pub mod preset;
pub mod report;

pub use preset::{handle_preset_command, PresetCommands};
pub use report::{handle_report_command, ReportCommands};

use clap::Args;

use crate::config::Settings;
use crate::display::ConsoleSink;
use crate::error::{StockroomError, StockroomResult};
use crate::modals::PresetManager;
use crate::models::SortDirection;
use crate::reports::ReportSession;
use crate::storage::Storage;

/// Options shared by commands that build a report view
#[derive(Args, Debug, Default)]
pub struct ViewArgs {
    /// Case-insensitive search across all columns
    #[arg(short, long)]
    pub search: Option<String>,

    /// Column to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Number of rows to generate
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Seed for reproducible synthetic data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Filter selection, e.g. `category=Electronics` or `dateRange=2025-01-01..2025-03-31`
    #[arg(short, long = "filter", value_name = "ID=VALUE")]
    pub filters: Vec<String>,

    /// Apply a saved preset's filters (name or id)
    #[arg(short, long)]
    pub preset: Option<String>,
}

/// Split an `ID=VALUE` argument
pub fn parse_filter_arg(arg: &str) -> StockroomResult<(&str, &str)> {
    match arg.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() => Ok((id.trim(), value.trim())),
        _ => Err(StockroomError::Validation(format!(
            "Invalid filter '{}'. Use ID=VALUE",
            arg
        ))),
    }
}

/// Record every `--filter` argument on the session
pub fn apply_filter_args(session: &mut ReportSession, filters: &[String]) -> StockroomResult<()> {
    for arg in filters {
        let (id, value) = parse_filter_arg(arg)?;
        session.set_filter_input(id, value)?;
    }
    Ok(())
}

/// Load a report and apply the view options
pub fn build_session(
    storage: &Storage,
    settings: &Settings,
    report_key: &str,
    args: &ViewArgs,
    sink: &mut ConsoleSink,
) -> StockroomResult<ReportSession> {
    let mut session = ReportSession::from_settings(settings, args.seed);
    if let Some(count) = args.count {
        session.set_row_count(count);
    }
    let report = session.load_report(report_key)?;

    if let Some(name_or_id) = &args.preset {
        let preset = storage
            .presets
            .find(name_or_id)?
            .ok_or_else(|| StockroomError::preset_not_found(name_or_id.clone()))?;
        let mut presets = PresetManager::with_presets(vec![preset.clone()]);
        let filters = presets.load_preset(preset.id, sink)?;
        session.apply_filters(&filters);
    }

    apply_filter_args(&mut session, &args.filters)?;

    if let Some(query) = &args.search {
        session.set_search(query.as_str());
    }

    if let Some(column) = &args.sort {
        if !report.has_column(column) {
            return Err(StockroomError::Validation(format!(
                "'{}' is not a column of {}",
                column, report.title
            )));
        }
        let direction = if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        session.set_sort(column.as_str(), direction);
    }

    Ok(session)
}
