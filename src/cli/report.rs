//! CLI commands for reports
//!
//! Lists the report and filter catalogs, shows a report's visible rows with
//! its summary stats, and runs the export flow.

use clap::Subcommand;
use serde_json::json;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use super::{build_session, ViewArgs};
use crate::catalog;
use crate::config::Settings;
use crate::display::{
    format_filter_list, format_report_list, format_report_rows, format_summary_stats, ConsoleSink,
};
use crate::error::{StockroomError, StockroomResult};
use crate::export::{CsvExportEngine, ExportEngine, ExportSnapshot, SimulatedExportEngine};
use crate::modals::{ExportManager, ExportOutcome};
use crate::models::{ExportFormat, NumberFormat, Orientation, PaperSize};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// List available report types
    List,

    /// List filter fields, optionally only those a report accepts
    Filters {
        /// Report key
        report: Option<String>,
    },

    /// Generate a report and print its visible rows
    Show {
        /// Report key (e.g. inventory-summary)
        report: String,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Export a report's visible rows
    Export {
        /// Report key
        report: String,

        #[command(flatten)]
        view: ViewArgs,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// File name without extension
        #[arg(long)]
        filename: Option<String>,

        /// Omit the header row
        #[arg(long)]
        no_headers: bool,

        /// Omit the applied-filters summary
        #[arg(long)]
        no_filters_summary: bool,

        /// Date pattern, e.g. DD/MM/YYYY
        #[arg(long)]
        date_format: Option<String>,

        /// Number locale for amounts
        #[arg(long, value_enum)]
        number_format: Option<NumberFormat>,

        /// PDF paper size
        #[arg(long, value_enum)]
        paper_size: Option<PaperSize>,

        /// PDF orientation
        #[arg(long, value_enum)]
        orientation: Option<Orientation>,

        /// Write the file into this directory (CSV only)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> StockroomResult<()> {
    match cmd {
        ReportCommands::List => {
            println!("{}", format_report_list(catalog::all_reports()));
            Ok(())
        }
        ReportCommands::Filters { report } => handle_filters(report.as_deref()),
        ReportCommands::Show { report, view } => handle_show(storage, settings, &report, &view),
        ReportCommands::Export {
            report,
            view,
            format,
            filename,
            no_headers,
            no_filters_summary,
            date_format,
            number_format,
            paper_size,
            orientation,
            out_dir,
        } => {
            let options = ExportOptions {
                format,
                filename,
                no_headers,
                no_filters_summary,
                date_format,
                number_format,
                paper_size,
                orientation,
                out_dir,
            };
            handle_export(storage, settings, &report, &view, options)
        }
    }
}

fn handle_filters(report: Option<&str>) -> StockroomResult<()> {
    let fields = match report {
        Some(key) => {
            let report =
                catalog::find_report(key).ok_or_else(|| StockroomError::report_not_found(key))?;
            catalog::filters_for(report)
        }
        None => catalog::all_filter_fields().iter().collect(),
    };
    println!("{}", format_filter_list(&fields));
    Ok(())
}

fn handle_show(
    storage: &Storage,
    settings: &Settings,
    report_key: &str,
    view: &ViewArgs,
) -> StockroomResult<()> {
    let mut sink = ConsoleSink::new();
    let mut session = build_session(storage, settings, report_key, view, &mut sink)?;
    let report = session
        .report()
        .ok_or_else(|| StockroomError::report_not_found(report_key))?;

    println!("{}", report.title);
    println!();
    for (id, value) in session.active_filters().iter() {
        let label = catalog::find_filter(id).map(|f| f.label).unwrap_or(id);
        println!("Filter {}: {}", label, value);
    }

    let stats = session.summary_stats();
    println!("{}", format_summary_stats(&stats));
    println!();
    println!("{}", format_report_rows(report, session.visible_rows()));

    Ok(())
}

struct ExportOptions {
    format: Option<ExportFormat>,
    filename: Option<String>,
    no_headers: bool,
    no_filters_summary: bool,
    date_format: Option<String>,
    number_format: Option<NumberFormat>,
    paper_size: Option<PaperSize>,
    orientation: Option<Orientation>,
    out_dir: Option<PathBuf>,
}

fn handle_export(
    storage: &Storage,
    settings: &Settings,
    report_key: &str,
    view: &ViewArgs,
    options: ExportOptions,
) -> StockroomResult<()> {
    let mut sink = ConsoleSink::new();
    let mut session = build_session(storage, settings, report_key, view, &mut sink)?;

    let engine: Box<dyn ExportEngine> = match &options.out_dir {
        Some(dir) => Box::new(
            CsvExportEngine::new(dir.clone()).currency_symbol(settings.currency_symbol.clone()),
        ),
        None => Box::new(SimulatedExportEngine),
    };
    let mut manager = ExportManager::from_settings(settings, engine);
    manager.open();

    {
        let form = manager.form_mut();
        if let Some(format) = options.format {
            form.format = format;
        }
        if let Some(name) = options.filename {
            form.file_name = name;
        }
        form.include_headers = !options.no_headers;
        form.include_filters_summary = !options.no_filters_summary;
        if let Some(pattern) = options.date_format {
            form.date_format = pattern;
        }
        if let Some(number_format) = options.number_format {
            form.number_format = number_format;
        }
        if let Some(paper_size) = options.paper_size {
            form.paper_size = paper_size;
        }
        if let Some(orientation) = options.orientation {
            form.orientation = orientation;
        }
    }

    let snapshot = ExportSnapshot::from_session(&mut session);
    manager.export(snapshot, Instant::now(), &mut sink)?;

    while let Some(deadline) = manager.deadline() {
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }

        match manager.poll_export(Instant::now(), &mut sink) {
            Some(ExportOutcome::Completed { job, path }) => {
                storage.log_export(
                    job.id.full(),
                    job.file_name.clone(),
                    &json!({
                        "report": job.snapshot.report_key,
                        "format": job.request.format,
                        "rows": job.snapshot.rows.len(),
                        "path": path.as_ref().map(|p| p.display().to_string()),
                    }),
                )?;
            }
            Some(ExportOutcome::Failed { error, .. }) => return Err(error),
            None => {}
        }
    }

    Ok(())
}
