//! Export request model
//!
//! Describes what the user asked the export dialog for: target format,
//! header/summary toggles, locale formatting and PDF page setup.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target file format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Excel workbook (.xlsx)
    #[default]
    Excel,
    /// Comma-separated values (.csv)
    Csv,
    /// Portable document (.pdf)
    Pdf,
}

impl ExportFormat {
    /// File extension for this format, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Excel => "xlsx",
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excel => write!(f, "Excel"),
            Self::Csv => write!(f, "CSV"),
            Self::Pdf => write!(f, "PDF"),
        }
    }
}

/// Number locale used when rendering amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// 1,23,456.00
    #[default]
    Indian,
    /// 123,456.00
    International,
    /// 123.456,00
    European,
}

impl NumberFormat {
    pub fn group_separator(&self) -> &'static str {
        match self {
            Self::Indian | Self::International => ",",
            Self::European => ".",
        }
    }

    pub fn decimal_separator(&self) -> &'static str {
        match self {
            Self::Indian | Self::International => ".",
            Self::European => ",",
        }
    }
}

/// PDF paper size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum PaperSize {
    #[default]
    A4,
    A3,
    Letter,
    Legal,
}

/// PDF page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

/// Page setup, only meaningful for PDF exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageSetup {
    pub paper_size: PaperSize,
    pub orientation: Orientation,
}

/// A fully resolved export request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Target format
    pub format: ExportFormat,
    /// Whether to write a header row
    pub include_headers: bool,
    /// Whether to prefix the output with the applied filters
    pub include_filters_summary: bool,
    /// Date pattern such as `DD/MM/YYYY`
    pub date_format: String,
    /// Number locale for amounts
    pub number_format: NumberFormat,
    /// User supplied filename (without extension), if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Page setup, present only for PDF
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageSetup>,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            include_headers: true,
            include_filters_summary: true,
            date_format: "DD/MM/YYYY".to_string(),
            number_format: NumberFormat::default(),
            file_name: None,
            page: None,
        }
    }
}

/// Convert a `DD/MM/YYYY`-style pattern into a chrono format string
///
/// Recognised tokens are `YYYY`, `YY`, `MM` and `DD`; everything else is
/// copied through.
pub fn chrono_date_pattern(pattern: &str) -> String {
    pattern
        .replace("YYYY", "%Y")
        .replace("YY", "%y")
        .replace("MM", "%m")
        .replace("DD", "%d")
}
