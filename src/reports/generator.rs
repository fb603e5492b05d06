//! Synthetic row generation
//!
//! Each column name maps to a small generator function. A report's rows are
//! produced by running the generator of every configured column once per row
//! index; columns without a generator get the `-` placeholder.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::{self, filters};
use crate::models::money::DEFAULT_CURRENCY_SYMBOL;
use crate::models::{CellValue, Money, NumberFormat, ReportConfig, ReportRow};

/// Rows generated when no count is given
pub const DEFAULT_ROW_COUNT: usize = 50;

/// First day of the demo data window
const WINDOW_START: (i32, u32, u32) = (2025, 1, 1);
/// Number of days in the demo data window (2025-01-01 ..= 2026-12-31)
const WINDOW_DAYS: i64 = 730;

const PRODUCT_NAMES: &[&str] = &[
    "Wireless Barcode Scanner",
    "Thermal Label Printer",
    "Steel Storage Rack",
    "Corrugated Carton Box",
    "Office Chair Ergonomic",
    "A4 Copier Paper Ream",
    "Hex Bolt M8 Pack",
    "Packing Tape Roll",
    "LED Panel Light",
    "Safety Gloves Pair",
    "Cotton Work Shirt",
    "Pallet Jack Manual",
];

const STOCK_STATUS_VALUES: &[&str] = &["In Stock", "Low Stock", "Out of Stock", "Overstock"];

/// Inputs available to a column generator
pub struct CellContext<'a> {
    /// 1-based row index
    pub index: usize,
    pub rng: &'a mut StdRng,
    pub currency_symbol: &'a str,
}

impl CellContext<'_> {
    fn pick(&mut self, options: &[&str]) -> CellValue {
        options
            .choose(&mut *self.rng)
            .map(|s| CellValue::text(*s))
            .unwrap_or_else(CellValue::placeholder)
    }

    /// Pick from a filter option list, skipping its leading "all" entry
    fn pick_option(&mut self, options: &[&str]) -> CellValue {
        self.pick(options.get(1..).unwrap_or(&[]))
    }

    fn money(&mut self, min_major: i64, max_major: i64) -> CellValue {
        let major = self.rng.gen_range(min_major..=max_major);
        let minor = self.rng.gen_range(0..100);
        CellValue::Text(
            Money::from_major_minor(major, minor).format(self.currency_symbol, NumberFormat::Indian),
        )
    }

    fn percent(&mut self, min: f64, max: f64) -> CellValue {
        CellValue::Text(format!("{:.1}%", self.rng.gen_range(min..=max)))
    }

    fn date(&mut self) -> CellValue {
        let (y, m, d) = WINDOW_START;
        let offset = self.rng.gen_range(0..WINDOW_DAYS);
        NaiveDate::from_ymd_opt(y, m, d)
            .map(|start| CellValue::Text((start + Duration::days(offset)).format("%Y-%m-%d").to_string()))
            .unwrap_or_else(CellValue::placeholder)
    }

    fn count(&mut self, min: u32, max: u32) -> CellValue {
        CellValue::from(self.rng.gen_range(min..=max))
    }

    fn templated(&self, prefix: &str) -> CellValue {
        CellValue::Text(format!("{}-{:04}", prefix, self.index))
    }
}

/// A column value generator
pub type ColumnGenerator = fn(&mut CellContext<'_>) -> CellValue;

/// Column name -> generator
pub static COLUMN_GENERATORS: &[(&str, ColumnGenerator)] = &[
    ("Product Code", |c| c.templated("PRD")),
    ("Product Name", |c| c.pick(PRODUCT_NAMES)),
    ("Category", |c| c.pick_option(filters::CATEGORIES)),
    ("Warehouse", |c| c.pick_option(filters::WAREHOUSES)),
    ("Stock Qty", |c| c.count(0, 500)),
    ("Unit Price", |c| c.money(50, 25_000)),
    ("Total Value", |c| c.money(1_000, 5_00_000)),
    ("Stock Status", |c| c.pick(STOCK_STATUS_VALUES)),
    ("Last Updated", |c| c.date()),
    ("Movement ID", |c| c.templated("MOV")),
    ("Movement Date", |c| c.date()),
    ("Movement Type", |c| c.pick_option(filters::MOVEMENT_TYPES)),
    ("Quantity", |c| c.count(1, 250)),
    ("Reference No", |c| c.templated("REF")),
    ("Reorder Level", |c| c.count(10, 100)),
    ("Vendor ID", |c| c.templated("VEN")),
    ("Vendor Name", |c| c.pick_option(filters::VENDORS)),
    ("Total Orders", |c| c.count(1, 120)),
    ("Total Amount", |c| c.money(5_000, 10_00_000)),
    ("On-Time Delivery", |c| c.percent(60.0, 100.0)),
    ("Quality Rating", |c| {
        let tenths: u8 = c.rng.gen_range(25..=50);
        CellValue::Number(f64::from(tenths) / 10.0)
    }),
    ("Last Order Date", |c| c.date()),
    ("PO Number", |c| c.templated("PO")),
    ("Order Date", |c| c.date()),
    ("Items", |c| c.count(1, 40)),
    ("Order Status", |c| c.pick_option(filters::ORDER_STATUSES)),
    ("Payment Status", |c| c.pick_option(filters::PAYMENT_STATUSES)),
    ("Expected Delivery Date", |c| c.date()),
    ("Invoice No", |c| c.templated("INV")),
    ("Sale Date", |c| c.date()),
    ("Profit Margin", |c| c.percent(5.0, 45.0)),
];

/// Find the generator for a column
pub fn generator_for(column: &str) -> Option<ColumnGenerator> {
    COLUMN_GENERATORS
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, generator)| *generator)
}

/// Produces synthetic rows for report types
pub struct RowGenerator {
    rng: StdRng,
    currency_symbol: String,
}

impl Default for RowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    /// Create a reproducible generator
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    /// Set the currency symbol used for money columns
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Generate `count` rows for a report key
    ///
    /// Unknown keys produce no rows.
    pub fn generate(&mut self, report_key: &str, count: usize) -> Vec<ReportRow> {
        match catalog::find_report(report_key) {
            Some(config) => self.generate_for(config, count),
            None => Vec::new(),
        }
    }

    /// Generate `count` rows for a known report configuration
    pub fn generate_for(&mut self, config: &ReportConfig, count: usize) -> Vec<ReportRow> {
        (1..=count)
            .map(|index| {
                let mut ctx = CellContext {
                    index,
                    rng: &mut self.rng,
                    currency_symbol: &self.currency_symbol,
                };
                let mut row = ReportRow::new();
                for column in config.columns {
                    let value = match generator_for(column) {
                        Some(generate) => generate(&mut ctx),
                        None => CellValue::placeholder(),
                    };
                    row.insert(*column, value);
                }
                row
            })
            .collect()
    }
}
