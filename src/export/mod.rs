//! Export module for Stockroom
//!
//! Turns the visible rows of a report into an export job and hands it to an
//! engine:
//! - Simulated: accepts every job, writes nothing
//! - CSV: writes the rows to a `.csv` file

pub mod csv;
pub mod engine;
pub mod job;

pub use csv::write_report_csv;
pub use engine::{CsvExportEngine, ExportEngine, SimulatedExportEngine};
pub use job::{ExportJob, ExportSnapshot};
