//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The shop trades in a
//! single currency with two decimal places.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::error::StoreError;

/// Currency symbol used when displaying amounts.
pub const CURRENCY_SYMBOL: &str = "$";

/// Largest magnitude accepted when parsing text, in whole currency units.
pub const MAX_PARSED_AMOUNT: f64 = 1_000_000_000_000.0;

/// A monetary value stored in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub const fn from_cents(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    /// Amounts beyond the `i64` cent range saturate.
    ///
    /// ```
    /// use storefront::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::from_cents((amount * 100.0).round() as i64)
    }

    /// A zero amount.
    pub const fn zero() -> Self {
        Self::from_cents(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let cents = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, cents / 100, cents % 100)
    }

    /// Multiply by a quantity, saturating at the `i64` cent bounds.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::from_cents(self.amount_cents.saturating_mul(factor))
    }
}

impl FromStr for Money {
    type Err = StoreError;

    /// Parse a decimal amount such as `12.5` or `20`.
    ///
    /// Non-finite values (`NaN`, `inf`) and magnitudes above
    /// [`MAX_PARSED_AMOUNT`] are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value.abs() <= MAX_PARSED_AMOUNT => {
                Ok(Money::from_decimal(value))
            }
            _ => Err(StoreError::UnparseableAmount(trimmed.to_string())),
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_cents(self.amount_cents.saturating_sub(other.amount_cents))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
