//! Derived view over generated rows
//!
//! `visible_rows` is a pure function of (rows, search query, sort column,
//! sort direction). The session caches its output keyed by those inputs.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::models::{CellValue, Money, ReportRow, SortDirection};

/// Sort request for the visible rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

/// Comparable form of a cell
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Number(f64),
    Date(NaiveDate),
    Text(String),
    Missing,
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            Self::Number(_) => 0,
            Self::Date(_) => 1,
            Self::Text(_) => 2,
            Self::Missing => 3,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}

fn sort_key(column_is_date: bool, value: Option<&CellValue>, currency_symbol: &str) -> SortKey {
    let value = match value {
        Some(v) => v,
        None => return SortKey::Missing,
    };

    let text = match value {
        CellValue::Number(n) => return SortKey::Number(*n),
        CellValue::Text(s) => s.as_str(),
    };

    if !currency_symbol.is_empty() && text.starts_with(currency_symbol) {
        if let Ok(money) = Money::parse_display(text, currency_symbol) {
            return SortKey::Number(money.as_f64());
        }
    } else if column_is_date {
        if let Some(date) = parse_date(text) {
            return SortKey::Date(date);
        }
    } else if text.contains('%') {
        if let Ok(n) = text.replace('%', "").trim().parse::<f64>() {
            return SortKey::Number(n);
        }
    }

    SortKey::Text(text.to_string())
}

/// Keep rows where any cell contains the trimmed query (case-insensitive)
pub fn search_rows<'a>(rows: &'a [ReportRow], query: &str) -> Vec<&'a ReportRow> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|row| row.contains_lowercase(&needle))
        .collect()
}

/// Stable, type-aware sort by one column
pub fn sort_rows(rows: &mut [&ReportRow], sort: &SortSpec, currency_symbol: &str) {
    let column_is_date = sort.column.to_lowercase().contains("date");

    // Keys are computed once per row, not once per comparison
    let mut keyed: Vec<(SortKey, &ReportRow)> = rows
        .iter()
        .map(|row| {
            (
                sort_key(column_is_date, row.get(&sort.column), currency_symbol),
                *row,
            )
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ord = a.compare(b);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    for (slot, (_, row)) in rows.iter_mut().zip(keyed) {
        *slot = row;
    }
}

/// Search then sort, returning owned copies; `rows` is never modified
pub fn visible_rows(
    rows: &[ReportRow],
    query: &str,
    sort: Option<&SortSpec>,
    currency_symbol: &str,
) -> Vec<ReportRow> {
    let mut matched = search_rows(rows, query);
    if let Some(sort) = sort {
        sort_rows(&mut matched, sort, currency_symbol);
    }
    matched.into_iter().cloned().collect()
}
