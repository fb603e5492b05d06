//! Active filter selections and sort state

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value chosen for one filter field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A select option
    Select(String),
    /// An inclusive date range
    DateRange { from: NaiveDate, to: NaiveDate },
}

impl FilterValue {
    /// Parse a `YYYY-MM-DD..YYYY-MM-DD` range
    pub fn parse_date_range(s: &str) -> Result<Self, FilterParseError> {
        let (from, to) = s
            .split_once("..")
            .ok_or_else(|| FilterParseError::InvalidRange(s.to_string()))?;

        let from = NaiveDate::parse_from_str(from.trim(), "%Y-%m-%d")
            .map_err(|_| FilterParseError::InvalidDate(from.trim().to_string()))?;
        let to = NaiveDate::parse_from_str(to.trim(), "%Y-%m-%d")
            .map_err(|_| FilterParseError::InvalidDate(to.trim().to_string()))?;

        if to < from {
            return Err(FilterParseError::InvalidRange(s.to_string()));
        }

        Ok(Self::DateRange { from, to })
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(option) => write!(f, "{}", option),
            Self::DateRange { from, to } => write!(f, "{} to {}", from, to),
        }
    }
}

/// Error parsing a filter value from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterParseError {
    InvalidDate(String),
    InvalidRange(String),
}

impl fmt::Display for FilterParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "Invalid date '{}'. Use YYYY-MM-DD", s),
            Self::InvalidRange(s) => {
                write!(f, "Invalid date range '{}'. Use YYYY-MM-DD..YYYY-MM-DD", s)
            }
        }
    }
}

impl std::error::Error for FilterParseError {}

/// Filter id -> chosen value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveFilters(BTreeMap<String, FilterValue>);

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, filter_id: impl Into<String>, value: FilterValue) {
        self.0.insert(filter_id.into(), value);
    }

    pub fn with(mut self, filter_id: impl Into<String>, value: FilterValue) -> Self {
        self.set(filter_id, value);
        self
    }

    pub fn remove(&mut self, filter_id: &str) -> Option<FilterValue> {
        self.0.remove(filter_id)
    }

    pub fn get(&self, filter_id: &str) -> Option<&FilterValue> {
        self.0.get(filter_id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Sort direction of the visible rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}
