//! Display formatting for terminal output
//!
//! Tables for reports, filters and presets, plus the console notification
//! sink used by the CLI.

pub mod console;
pub mod preset;
pub mod report;

pub use console::ConsoleSink;
pub use preset::{format_preset_details, format_preset_list};
pub use report::{format_filter_list, format_report_list, format_report_rows, format_summary_stats};
