//! Report and filter-field configuration models
//!
//! Both are static descriptions built into the binary; see `catalog` for the
//! actual tables.

use serde::Serialize;
use std::fmt;

/// Static description of one report type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportConfig {
    /// Stable identifier, e.g. `inventory-valuation`
    pub key: &'static str,
    /// Display title
    pub title: &'static str,
    /// Icon name understood by the host
    pub icon: &'static str,
    /// Category tag used to group reports in a picker
    pub category: &'static str,
    /// Applicable filter field ids, in display order
    pub filters: &'static [&'static str],
    /// Column names, in display order
    pub columns: &'static [&'static str],
    /// Summary statistic ids, in display order
    pub summary_stats: &'static [&'static str],
}

impl ReportConfig {
    /// Check whether the report declares a column
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| *c == column)
    }

    /// Check whether a filter applies to this report
    pub fn has_filter(&self, filter_id: &str) -> bool {
        self.filters.iter().any(|f| *f == filter_id)
    }
}

impl fmt::Display for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Input kind of a filter field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    /// A from/to pair of calendar dates
    DateRange,
    /// One option out of a fixed list
    Select,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateRange => write!(f, "dateRange"),
            Self::Select => write!(f, "select"),
        }
    }
}

/// A reusable filter definition shared between report types
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterFieldDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub kind: InputKind,
    /// Allowed options for `Select`; the first one means "all"
    pub options: &'static [&'static str],
}

impl FilterFieldDefinition {
    /// The "no filter" option of a select field
    pub fn all_option(&self) -> Option<&'static str> {
        match self.kind {
            InputKind::Select => self.options.first().copied(),
            InputKind::DateRange => None,
        }
    }

    /// Check whether a select option is allowed (case-insensitive)
    pub fn find_option(&self, value: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|o| o.eq_ignore_ascii_case(value.trim()))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: FilterFieldDefinition = FilterFieldDefinition {
        id: "stockStatus",
        label: "Stock Status",
        icon: "layers",
        kind: InputKind::Select,
        options: &["All Status", "In Stock", "Low Stock"],
    };

    #[test]
    fn test_all_option_is_first() {
        assert_eq!(STATUS.all_option(), Some("All Status"));
    }

    #[test]
    fn test_find_option_ignores_case() {
        assert_eq!(STATUS.find_option("low stock"), Some("Low Stock"));
        assert_eq!(STATUS.find_option("Discontinued"), None);
    }

    #[test]
    fn test_date_range_has_no_all_option() {
        let range = FilterFieldDefinition {
            id: "dateRange",
            label: "Date Range",
            icon: "calendar",
            kind: InputKind::DateRange,
            options: &[],
        };
        assert_eq!(range.all_option(), None);
        assert_eq!(range.kind.to_string(), "dateRange");
    }
}
