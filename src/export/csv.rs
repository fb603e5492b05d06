//! CSV rendering of a report export
//!
//! Rows are written in the report's column order. Date and currency cells are
//! re-rendered with the request's date pattern and number locale; every other
//! cell is written as displayed.

use chrono::NaiveDate;
use std::io::Write;

use crate::error::StockroomResult;
use crate::models::export::chrono_date_pattern;
use crate::models::{CellValue, ExportRequest, Money, NumberFormat};

use super::job::ExportSnapshot;

/// Write a snapshot as CSV
///
/// With `include_filters_summary` the output starts with `# Report:` and one
/// `# Filter:` line per applied filter (or `# Filters: none`). Summary lines
/// have a single field, so the writer runs in flexible mode.
pub fn write_report_csv<W: Write>(
    writer: W,
    snapshot: &ExportSnapshot,
    request: &ExportRequest,
    currency_symbol: &str,
) -> StockroomResult<()> {
    let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    if request.include_filters_summary {
        csv_writer.write_record([format!("# Report: {}", snapshot.report_title)])?;
        let summary = snapshot.filter_summary();
        if summary.is_empty() {
            csv_writer.write_record(["# Filters: none"])?;
        }
        for line in summary {
            csv_writer.write_record([format!("# Filter: {}", line)])?;
        }
    }

    if request.include_headers {
        csv_writer.write_record(&snapshot.columns)?;
    }

    let date_pattern = chrono_date_pattern(&request.date_format);
    for row in &snapshot.rows {
        let record: Vec<String> = snapshot
            .columns
            .iter()
            .map(|column| match row.get(column) {
                Some(value) => render_cell(
                    column,
                    value,
                    &date_pattern,
                    request.number_format,
                    currency_symbol,
                ),
                None => String::new(),
            })
            .collect();
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn render_cell(
    column: &str,
    value: &CellValue,
    date_pattern: &str,
    number_format: NumberFormat,
    currency_symbol: &str,
) -> String {
    let text = match value {
        CellValue::Number(_) => return value.to_string(),
        CellValue::Text(text) => text.as_str(),
    };

    if !currency_symbol.is_empty() && text.starts_with(currency_symbol) {
        if let Ok(money) = Money::parse_display(text, currency_symbol) {
            return money.format(currency_symbol, number_format);
        }
    }

    if column.to_lowercase().contains("date") {
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return date.format(date_pattern).to_string();
        }
    }

    text.to_string()
}
