//! Report session
//!
//! Owns the active report state: the selected report type, its generated rows,
//! the filter selections, the search query and the sort order. Hosts drive it
//! through explicit mutators and read the derived `visible_rows`.

use crate::catalog;
use crate::config::Settings;
use crate::error::{StockroomError, StockroomResult};
use crate::models::{
    ActiveFilters, FilterValue, InputKind, ReportConfig, ReportRow, SortDirection,
};

use super::generator::{RowGenerator, DEFAULT_ROW_COUNT};
use super::summary::{compute_stats, SummaryStat};
use super::view::{self, SortSpec};

/// Inputs the visible view was computed from
#[derive(Debug, Clone, PartialEq)]
struct ViewKey {
    revision: u64,
    query: String,
    sort: Option<SortSpec>,
}

#[derive(Debug)]
struct ViewCache {
    key: ViewKey,
    rows: Vec<ReportRow>,
}

/// Session-scoped report state
pub struct ReportSession {
    generator: RowGenerator,
    row_count: usize,
    report: Option<&'static ReportConfig>,
    rows: Vec<ReportRow>,
    /// Bumped whenever `rows` is replaced
    revision: u64,
    filters: ActiveFilters,
    search: String,
    sort_column: Option<String>,
    sort_direction: SortDirection,
    cache: Option<ViewCache>,
    computations: usize,
}

impl Default for ReportSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSession {
    /// Create a session with an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_generator(RowGenerator::new())
    }

    /// Create a session whose synthetic data is reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(RowGenerator::with_seed(seed))
    }

    /// Create a session from user settings
    pub fn from_settings(settings: &Settings, seed: Option<u64>) -> Self {
        let generator = match seed {
            Some(seed) => RowGenerator::with_seed(seed),
            None => RowGenerator::new(),
        };
        let mut session =
            Self::with_generator(generator.currency_symbol(settings.currency_symbol.clone()));
        session.row_count = settings.default_row_count;
        session
    }

    pub fn with_generator(generator: RowGenerator) -> Self {
        Self {
            generator,
            row_count: DEFAULT_ROW_COUNT,
            report: None,
            rows: Vec::new(),
            revision: 0,
            filters: ActiveFilters::new(),
            search: String::new(),
            sort_column: None,
            sort_direction: SortDirection::Asc,
            cache: None,
            computations: 0,
        }
    }

    /// Number of rows `load_report` generates
    pub fn set_row_count(&mut self, count: usize) {
        self.row_count = count;
    }

    pub fn currency_symbol(&self) -> &str {
        self.generator.symbol()
    }

    /// Look up and select a report type
    ///
    /// Rows are not generated; call `generate_rows` or use `load_report`.
    pub fn select_report(&mut self, key: &str) -> StockroomResult<&'static ReportConfig> {
        let config =
            catalog::find_report(key).ok_or_else(|| StockroomError::report_not_found(key))?;
        self.report = Some(config);
        Ok(config)
    }

    /// Generate synthetic rows for a report key without storing them
    ///
    /// Unknown keys produce an empty result.
    pub fn generate_rows(&mut self, key: &str, count: usize) -> Vec<ReportRow> {
        self.generator.generate(key, count)
    }

    /// Select a report, generate its rows and start from a clean view
    pub fn load_report(&mut self, key: &str) -> StockroomResult<&'static ReportConfig> {
        let config = self.select_report(key)?;
        let rows = self.generator.generate_for(config, self.row_count);
        self.replace_rows(rows);
        self.reset_filters();
        Ok(config)
    }

    /// Replace the loaded rows
    pub fn replace_rows(&mut self, rows: Vec<ReportRow>) {
        self.rows = rows;
        self.revision += 1;
    }

    /// The selected report, if any
    pub fn report(&self) -> Option<&'static ReportConfig> {
        self.report
    }

    /// All loaded rows, before search and sort
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Record a filter selection
    ///
    /// The filter must exist and apply to the selected report. Choosing the
    /// "all" option of a select clears the filter. Filters are kept as state
    /// and captured by presets; they do not exclude rows from the view.
    pub fn set_filter(&mut self, filter_id: &str, value: FilterValue) -> StockroomResult<()> {
        let field =
            catalog::find_filter(filter_id).ok_or_else(|| StockroomError::filter_not_found(filter_id))?;

        if let Some(report) = self.report {
            if !report.has_filter(field.id) {
                return Err(StockroomError::Validation(format!(
                    "Filter '{}' does not apply to {}",
                    field.label, report.title
                )));
            }
        }

        let value = match (field.kind, value) {
            (InputKind::Select, FilterValue::Select(option)) => {
                let option = field.find_option(&option).ok_or_else(|| {
                    StockroomError::Validation(format!(
                        "'{}' is not a valid {} option",
                        option, field.label
                    ))
                })?;
                if Some(option) == field.all_option() {
                    self.filters.remove(field.id);
                    return Ok(());
                }
                FilterValue::Select(option.to_string())
            }
            (InputKind::DateRange, range @ FilterValue::DateRange { .. }) => range,
            _ => {
                return Err(StockroomError::Validation(format!(
                    "{} expects a {} value",
                    field.label, field.kind
                )))
            }
        };

        self.filters.set(field.id, value);
        Ok(())
    }

    /// Record a filter from raw text (`Electronics`, `2025-01-01..2025-03-31`)
    pub fn set_filter_input(&mut self, filter_id: &str, raw: &str) -> StockroomResult<()> {
        let field =
            catalog::find_filter(filter_id).ok_or_else(|| StockroomError::filter_not_found(filter_id))?;
        let value = match field.kind {
            InputKind::Select => FilterValue::Select(raw.trim().to_string()),
            InputKind::DateRange => FilterValue::parse_date_range(raw)
                .map_err(|e| StockroomError::Validation(e.to_string()))?,
        };
        self.set_filter(field.id, value)
    }

    pub fn clear_filter(&mut self, filter_id: &str) {
        self.filters.remove(filter_id);
    }

    pub fn active_filters(&self) -> &ActiveFilters {
        &self.filters
    }

    /// Replace the filter selection, e.g. with a loaded preset's snapshot
    pub fn apply_filters(&mut self, filters: &ActiveFilters) {
        self.filters = filters.clone();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_sort(&mut self, column: impl Into<String>, direction: SortDirection) {
        self.sort_column = Some(column.into());
        self.sort_direction = direction;
    }

    /// Header-click behaviour: same column flips, a new column starts ascending
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort_column.as_deref() == Some(column) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = Some(column.to_string());
            self.sort_direction = SortDirection::Asc;
        }
    }

    pub fn sort_column(&self) -> Option<&str> {
        self.sort_column.as_deref()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Clear filters, search and sort; keep the report and its rows
    pub fn reset_filters(&mut self) {
        self.filters.clear();
        self.search.clear();
        self.sort_column = None;
        self.sort_direction = SortDirection::Asc;
    }

    fn view_key(&self) -> ViewKey {
        ViewKey {
            revision: self.revision,
            query: self.search.trim().to_string(),
            sort: self.sort_column.as_ref().map(|column| SortSpec {
                column: column.clone(),
                direction: self.sort_direction,
            }),
        }
    }

    /// Rows after search and sort, recomputed only when an input changed
    pub fn visible_rows(&mut self) -> &[ReportRow] {
        let key = self.view_key();
        let stale = self.cache.as_ref().map(|c| c.key != key).unwrap_or(true);

        if stale {
            let rows = view::visible_rows(
                &self.rows,
                &key.query,
                key.sort.as_ref(),
                self.generator.symbol(),
            );
            self.computations += 1;
            self.cache = Some(ViewCache { key, rows });
        }

        match &self.cache {
            Some(cache) => &cache.rows,
            None => &[],
        }
    }

    /// Summary statistics of the selected report over the visible rows
    pub fn summary_stats(&mut self) -> Vec<SummaryStat> {
        let ids = match self.report {
            Some(report) => report.summary_stats,
            None => return Vec::new(),
        };
        let symbol = self.generator.symbol().to_string();
        compute_stats(ids, self.visible_rows(), &symbol)
    }

    /// How many times the visible view has been computed
    pub fn view_computations(&self) -> usize {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn loaded(key: &str) -> ReportSession {
        let mut session = ReportSession::with_seed(99);
        session.load_report(key).unwrap();
        session
    }

    #[test]
    fn test_unknown_report_is_not_found() {
        let mut session = ReportSession::with_seed(1);
        let err = session.select_report("payroll").unwrap_err();
        assert!(err.is_not_found());
        assert!(session.generate_rows("payroll", 50).is_empty());
        assert!(session.load_report("payroll").is_err());
        assert!(session.report().is_none());
        assert!(session.visible_rows().is_empty());
    }

    #[test]
    fn test_load_report_generates_default_rows() {
        let mut session = loaded("inventory-summary");
        assert_eq!(session.report().unwrap().key, "inventory-summary");
        assert_eq!(session.rows().len(), 50);
        assert_eq!(session.visible_rows().len(), 50);
    }

    #[test]
    fn test_search_finds_single_vendor_row() {
        let mut session = loaded("low-stock-alert");
        let mut rows = session.rows().to_vec();
        rows[17].insert("Vendor Name", "Quillon Polymers");
        session.replace_rows(rows.clone());

        session.set_search("quillon");
        let visible = session.visible_rows().to_vec();
        assert_eq!(visible, vec![rows[17].clone()]);
    }

    #[test]
    fn test_visible_rows_never_mutate_loaded_rows() {
        let mut session = loaded("sales-analysis");
        let before = session.rows().to_vec();

        session.set_sort("Total Amount", SortDirection::Desc);
        session.set_search("a");
        let _ = session.visible_rows();

        assert_eq!(session.rows(), before.as_slice());
    }

    #[test]
    fn test_view_is_memoized_on_inputs() {
        let mut session = loaded("stock-movement");
        let _ = session.visible_rows();
        let _ = session.visible_rows();
        assert_eq!(session.view_computations(), 1);

        // Whitespace around the query does not change the derived view
        session.set_search("  ");
        let _ = session.visible_rows();
        assert_eq!(session.view_computations(), 1);

        session.set_sort("Quantity", SortDirection::Asc);
        let _ = session.visible_rows();
        assert_eq!(session.view_computations(), 2);

        session.toggle_sort("Quantity");
        assert_eq!(session.sort_direction(), SortDirection::Desc);
        let _ = session.visible_rows();
        assert_eq!(session.view_computations(), 3);

        // Filters are not an input of the view
        session.set_filter_input("movementType", "Inbound").unwrap();
        let _ = session.visible_rows();
        assert_eq!(session.view_computations(), 3);
    }

    #[test]
    fn test_filters_do_not_exclude_rows() {
        let mut session = loaded("inventory-summary");
        session.set_filter_input("stockStatus", "Out of Stock").unwrap();
        assert_eq!(session.visible_rows().len(), 50);
        assert_eq!(session.active_filters().len(), 1);
    }

    #[test]
    fn test_set_filter_validation() {
        let mut session = loaded("inventory-summary");

        assert!(session.set_filter_input("vendor", "Apex Traders").is_err());
        assert!(session.set_filter_input("nope", "x").unwrap_err().is_not_found());
        assert!(session.set_filter_input("category", "Groceries").unwrap_err().is_validation());
        assert!(session.set_filter_input("dateRange", "yesterday").is_err());

        session.set_filter_input("category", "electronics").unwrap();
        assert_eq!(
            session.active_filters().get("category"),
            Some(&FilterValue::Select("Electronics".into()))
        );

        // Choosing the "all" option clears the filter
        session.set_filter_input("category", "All Categories").unwrap();
        assert!(session.active_filters().get("category").is_none());

        session.set_filter_input("dateRange", "2025-04-01..2025-06-30").unwrap();
        assert_eq!(
            session.active_filters().get("dateRange"),
            Some(&FilterValue::DateRange {
                from: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                to: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            })
        );
    }

    #[test]
    fn test_reset_filters_keeps_rows() {
        let mut session = loaded("purchase-orders");
        session.set_filter_input("orderStatus", "Pending").unwrap();
        session.set_search("PO-00");
        session.set_sort("Order Date", SortDirection::Desc);

        session.reset_filters();

        assert!(session.active_filters().is_empty());
        assert_eq!(session.search(), "");
        assert_eq!(session.sort_column(), None);
        assert_eq!(session.sort_direction(), SortDirection::Asc);
        assert_eq!(session.rows().len(), 50);
        assert_eq!(session.report().unwrap().key, "purchase-orders");
    }

    #[test]
    fn test_reloading_clears_state() {
        let mut session = loaded("purchase-orders");
        session.set_search("zzz");
        assert!(session.visible_rows().is_empty());

        session.load_report("vendor-performance").unwrap();
        assert_eq!(session.search(), "");
        assert_eq!(session.visible_rows().len(), 50);
    }

    #[test]
    fn test_summary_stats_follow_report_config() {
        let mut session = loaded("inventory-summary");
        let stats = session.summary_stats();
        let ids: Vec<_> = stats.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["totalRecords", "totalValue", "lowStockItems", "outOfStockItems"]
        );
        assert_eq!(stats[0].value, "50");
    }

    #[test]
    fn test_row_count_from_settings() {
        let mut settings = Settings::default();
        settings.default_row_count = 12;
        settings.currency_symbol = "$".into();

        let mut session = ReportSession::from_settings(&settings, Some(4));
        session.load_report("sales-analysis").unwrap();
        assert_eq!(session.rows().len(), 12);
        assert_eq!(session.currency_symbol(), "$");
    }
}
