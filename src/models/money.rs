//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (paise/cents, i64) to avoid
//! floating-point drift when summing report columns. Display strings carry a
//! currency symbol and locale-specific digit grouping, e.g. `₹1,23,456.00`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

use super::export::NumberFormat;

/// Currency symbol used when no explicit symbol is supplied
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Represents a monetary amount stored as minor units (hundredths)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use stockroom::models::Money;
    /// let amount = Money::from_minor(120050); // ₹1,200.50
    /// assert_eq!(amount.major(), 1200);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole units and minor units
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Self(major * 100 + minor)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor units portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Amount as a floating point number of whole units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a display string such as `₹15,000.00`
    ///
    /// The currency symbol and `,` group separators are stripped before the
    /// decimal value is read.
    pub fn parse_display(s: &str, symbol: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = rest.strip_prefix(symbol).unwrap_or(rest);
        let digits: String = rest.chars().filter(|c| *c != ',').collect();

        if digits.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits.as_str(), ""),
        };

        if !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
        };

        let minor: i64 = match frac.len() {
            0 => 0,
            1 => {
                frac.parse::<i64>()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                    * 10
            }
            _ => frac[..2]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
        };

        let value = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(minor))
            .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?;
        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol and the locale's digit grouping
    pub fn format(&self, symbol: &str, number_format: NumberFormat) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let whole = group_digits(self.major().abs(), number_format);
        format!(
            "{}{}{}{}{:02}",
            sign,
            symbol,
            whole,
            number_format.decimal_separator(),
            self.minor_part()
        )
    }
}

/// Insert group separators into a non-negative integer
pub fn group_digits(value: i64, number_format: NumberFormat) -> String {
    let digits = value.abs().to_string();
    let mut groups: Vec<&str> = Vec::new();
    let mut end = digits.len();

    // Last group is always three digits
    if end > 3 {
        groups.push(&digits[end - 3..end]);
        end -= 3;
        let size = match number_format {
            NumberFormat::Indian => 2,
            NumberFormat::International | NumberFormat::European => 3,
        };
        while end > size {
            groups.push(&digits[end - size..end]);
            end -= size;
        }
    }
    groups.push(&digits[..end]);
    groups.reverse();
    groups.join(number_format.group_separator())
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.format(DEFAULT_CURRENCY_SYMBOL, NumberFormat::Indian)
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
