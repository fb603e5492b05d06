//! Summary statistics shown above a report table
//!
//! Each report lists the stat ids it wants; every id resolves to a label and a
//! function over the currently visible rows.

use serde::Serialize;

use crate::models::{CellValue, Money, NumberFormat, ReportRow};
use crate::models::row::PLACEHOLDER;

/// Inputs to a stat function
pub struct StatInput<'a> {
    pub rows: &'a [ReportRow],
    pub currency_symbol: &'a str,
}

/// A computed stat function
pub type StatFn = fn(&StatInput<'_>) -> String;

/// Definition of one summary statistic
pub struct StatDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub compute: StatFn,
}

/// A computed statistic ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryStat {
    pub id: String,
    pub label: String,
    pub value: String,
}

fn sum_money(input: &StatInput<'_>, column: &str) -> String {
    let total: Money = input
        .rows
        .iter()
        .filter_map(|r| r.get(column))
        .filter_map(|v| Money::parse_display(&v.to_string(), input.currency_symbol).ok())
        .sum();
    total.format(input.currency_symbol, NumberFormat::Indian)
}

fn sum_numbers(rows: &[ReportRow], column: &str) -> String {
    let total: f64 = rows
        .iter()
        .filter_map(|r| r.get(column))
        .filter_map(CellValue::as_number)
        .sum();
    CellValue::Number(total).to_string()
}

fn count_equal(rows: &[ReportRow], column: &str, expected: &str) -> String {
    rows.iter()
        .filter(|r| r.get(column).map(|v| v.to_string() == expected).unwrap_or(false))
        .count()
        .to_string()
}

fn average_percent(rows: &[ReportRow], column: &str) -> String {
    let values: Vec<f64> = rows
        .iter()
        .filter_map(|r| r.get(column))
        .filter_map(|v| v.to_string().trim_end_matches('%').trim().parse::<f64>().ok())
        .collect();
    if values.is_empty() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.1}%", values.iter().sum::<f64>() / values.len() as f64)
}

pub static STATS: &[StatDefinition] = &[
    StatDefinition {
        id: "totalRecords",
        label: "Total Records",
        compute: |i| i.rows.len().to_string(),
    },
    StatDefinition {
        id: "totalValue",
        label: "Total Stock Value",
        compute: |i| sum_money(i, "Total Value"),
    },
    StatDefinition {
        id: "totalAmount",
        label: "Total Amount",
        compute: |i| sum_money(i, "Total Amount"),
    },
    StatDefinition {
        id: "totalQuantity",
        label: "Total Quantity",
        compute: |i| sum_numbers(i.rows, "Quantity"),
    },
    StatDefinition {
        id: "lowStockItems",
        label: "Low Stock Items",
        compute: |i| count_equal(i.rows, "Stock Status", "Low Stock"),
    },
    StatDefinition {
        id: "outOfStockItems",
        label: "Out of Stock Items",
        compute: |i| count_equal(i.rows, "Stock Status", "Out of Stock"),
    },
    StatDefinition {
        id: "pendingOrders",
        label: "Pending Orders",
        compute: |i| count_equal(i.rows, "Order Status", "Pending"),
    },
    StatDefinition {
        id: "avgOnTimeDelivery",
        label: "Avg On-Time Delivery",
        compute: |i| average_percent(i.rows, "On-Time Delivery"),
    },
    StatDefinition {
        id: "avgProfitMargin",
        label: "Avg Profit Margin",
        compute: |i| average_percent(i.rows, "Profit Margin"),
    },
];

/// Look up a stat definition by id
pub fn find_stat(id: &str) -> Option<&'static StatDefinition> {
    STATS.iter().find(|s| s.id == id)
}

/// Compute the given stats over rows; unknown ids yield `-`
pub fn compute_stats(ids: &[&str], rows: &[ReportRow], currency_symbol: &str) -> Vec<SummaryStat> {
    let input = StatInput {
        rows,
        currency_symbol,
    };
    ids.iter()
        .map(|id| match find_stat(id) {
            Some(def) => SummaryStat {
                id: def.id.to_string(),
                label: def.label.to_string(),
                value: (def.compute)(&input),
            },
            None => SummaryStat {
                id: id.to_string(),
                label: id.to_string(),
                value: PLACEHOLDER.to_string(),
            },
        })
        .collect()
}
