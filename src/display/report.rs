//! Report formatting for terminal output
//!
//! Catalog listings, generated rows and summary statistics rendered as
//! `tabled` tables.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::{FilterFieldDefinition, InputKind, ReportConfig, ReportRow};
use crate::models::row::PLACEHOLDER;
use crate::reports::SummaryStat;

/// Format the report catalog as a table
pub fn format_report_list(reports: &[ReportConfig]) -> String {
    if reports.is_empty() {
        return "No reports available.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Key", "Title", "Category", "Columns", "Filters"]);
    for report in reports {
        builder.push_record([
            report.key.to_string(),
            report.title.to_string(),
            report.category.to_string(),
            report.columns.len().to_string(),
            report.filters.join(", "),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Format filter fields with their options
pub fn format_filter_list(fields: &[&FilterFieldDefinition]) -> String {
    if fields.is_empty() {
        return "No filters.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Id", "Label", "Kind", "Options"]);
    for field in fields {
        let options = match field.kind {
            InputKind::DateRange => "YYYY-MM-DD..YYYY-MM-DD".to_string(),
            InputKind::Select => field.options.join(", "),
        };
        builder.push_record([
            field.id.to_string(),
            field.label.to_string(),
            field.kind.to_string(),
            options,
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Format rows in the report's column order
pub fn format_report_rows(report: &ReportConfig, rows: &[ReportRow]) -> String {
    if rows.is_empty() {
        return "No matching rows.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(report.columns.iter().copied());
    for row in rows {
        builder.push_record(row.display_cells(report.columns));
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.to_string()
}

/// Format summary stats as `Label: value` lines
pub fn format_summary_stats(stats: &[SummaryStat]) -> String {
    let width = stats.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);
    stats
        .iter()
        .map(|s| {
            let value = if s.value.is_empty() { PLACEHOLDER } else { s.value.as_str() };
            format!("{:<width$}  {}", s.label, value, width = width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_report_list_has_every_key() {
        let output = format_report_list(catalog::all_reports());
        for report in catalog::all_reports() {
            assert!(output.contains(report.key));
        }
    }

    #[test]
    fn test_filter_list_shows_options() {
        let report = catalog::find_report("stock-movement").unwrap();
        let output = format_filter_list(&catalog::filters_for(report));
        assert!(output.contains("movementType"));
        assert!(output.contains("YYYY-MM-DD..YYYY-MM-DD"));
        assert_eq!(format_filter_list(&[]), "No filters.");
    }

    #[test]
    fn test_rows_use_column_order() {
        let report = catalog::find_report("low-stock-alert").unwrap();
        let rows = vec![ReportRow::new()
            .with("Product Code", "PRD-0001")
            .with("Stock Qty", 3.0)];

        let output = format_report_rows(report, &rows);
        let header = output.lines().next().unwrap();
        let code = header.find("Product Code").unwrap();
        let status = header.find("Stock Status").unwrap();
        assert!(code < status);
        assert!(output.contains("PRD-0001"));
        assert_eq!(format_report_rows(report, &[]), "No matching rows.");
    }

    #[test]
    fn test_summary_stats_alignment() {
        let stats = vec![
            SummaryStat {
                id: "totalRecords".into(),
                label: "Total Records".into(),
                value: "50".into(),
            },
            SummaryStat {
                id: "x".into(),
                label: "Avg".into(),
                value: String::new(),
            },
        ];
        assert_eq!(
            format_summary_stats(&stats),
            "Total Records  50\nAvg            -"
        );
    }
}
