//! Static report configuration
//!
//! The report types and filter fields are fixed at build time. Lookups never
//! fail hard: unknown keys simply return `None`.

pub mod filters;
pub mod reports;

pub use filters::FILTER_FIELDS;
pub use reports::REPORTS;

use crate::models::{FilterFieldDefinition, ReportConfig};

/// All report types, in picker order
pub fn all_reports() -> &'static [ReportConfig] {
    REPORTS
}

/// Look up a report type by key
pub fn find_report(key: &str) -> Option<&'static ReportConfig> {
    REPORTS.iter().find(|r| r.key == key.trim())
}

/// All filter fields
pub fn all_filter_fields() -> &'static [FilterFieldDefinition] {
    FILTER_FIELDS
}

/// Look up a filter field by id
pub fn find_filter(id: &str) -> Option<&'static FilterFieldDefinition> {
    FILTER_FIELDS.iter().find(|f| f.id == id.trim())
}

/// The filter fields a report applies, in the report's order
pub fn filters_for(report: &ReportConfig) -> Vec<&'static FilterFieldDefinition> {
    report.filters.iter().filter_map(|id| find_filter(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InputKind;
    use crate::reports::summary::find_stat;
    use std::collections::HashSet;

    #[test]
    fn test_every_report_filter_is_defined() {
        for report in all_reports() {
            for id in report.filters {
                assert!(
                    find_filter(id).is_some(),
                    "report {} references unknown filter {}",
                    report.key,
                    id
                );
            }
            assert_eq!(filters_for(report).len(), report.filters.len());
        }
    }

    #[test]
    fn test_every_summary_stat_is_defined() {
        for report in all_reports() {
            for id in report.summary_stats {
                assert!(find_stat(id).is_some(), "unknown stat {}", id);
            }
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = all_reports().iter().map(|r| r.key).collect();
        assert_eq!(keys.len(), all_reports().len());

        let ids: HashSet<_> = all_filter_fields().iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), all_filter_fields().len());
    }

    #[test]
    fn test_select_fields_have_an_all_option() {
        for field in all_filter_fields() {
            match field.kind {
                InputKind::Select => {
                    assert!(field.options.len() > 1, "{} has no options", field.id);
                    assert!(field.options[0].starts_with("All "));
                }
                InputKind::DateRange => assert!(field.options.is_empty()),
            }
        }
    }

    #[test]
    fn test_find_report() {
        assert_eq!(find_report("stock-movement").unwrap().title, "Stock Movement");
        assert!(find_report("payroll").is_none());
        assert!(find_report("").is_none());
    }
}
