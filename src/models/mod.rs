//! Core data models for Stockroom
//!
//! This module contains the data structures of the reports domain: report and
//! filter configuration, generated rows, filter selections, presets and export
//! requests.

pub mod export;
pub mod filter;
pub mod ids;
pub mod money;
pub mod preset;
pub mod report;
pub mod row;

pub use export::{ExportFormat, ExportRequest, NumberFormat, Orientation, PageSetup, PaperSize};
pub use filter::{ActiveFilters, FilterParseError, FilterValue, SortDirection};
pub use ids::{ExportId, PresetId};
pub use money::{Money, DEFAULT_CURRENCY_SYMBOL};
pub use preset::{FilterPreset, PresetValidationError};
pub use report::{FilterFieldDefinition, InputKind, ReportConfig};
pub use row::{CellValue, ReportRow};
