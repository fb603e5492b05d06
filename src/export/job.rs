//! Export job description
//!
//! A job bundles what the export engine needs: the report snapshot taken when
//! the user pressed export, the resolved request and the final file name.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog;
use crate::models::{ActiveFilters, ExportId, ExportRequest, ReportConfig, ReportRow};
use crate::reports::ReportSession;

/// The report being exported, captured at request time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSnapshot {
    pub report_key: String,
    pub report_title: String,
    pub columns: Vec<String>,
    pub rows: Vec<ReportRow>,
    pub filters: ActiveFilters,
}

impl ExportSnapshot {
    pub fn new(report: &ReportConfig, rows: Vec<ReportRow>, filters: ActiveFilters) -> Self {
        Self {
            report_key: report.key.to_string(),
            report_title: report.title.to_string(),
            columns: report.columns.iter().map(|c| c.to_string()).collect(),
            rows,
            filters,
        }
    }

    /// Capture the session's selected report and visible rows
    ///
    /// Returns `None` when no report is selected.
    pub fn from_session(session: &mut ReportSession) -> Option<Self> {
        let report = session.report()?;
        let filters = session.active_filters().clone();
        let rows = session.visible_rows().to_vec();
        Some(Self::new(report, rows, filters))
    }

    /// Human-readable `Label: value` lines for the applied filters
    pub fn filter_summary(&self) -> Vec<String> {
        self.filters
            .iter()
            .map(|(id, value)| {
                let label = catalog::find_filter(id).map(|f| f.label).unwrap_or(id);
                format!("{}: {}", label, value)
            })
            .collect()
    }
}

/// A scheduled export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportJob {
    pub id: ExportId,
    pub snapshot: ExportSnapshot,
    pub request: ExportRequest,
    /// File name including extension
    pub file_name: String,
    pub requested_on: NaiveDate,
}
