//! # Money Module
//!
//! Provides the `Price` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart summing float prices drifts a cent at a time.                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    12.99 on the wire ──► 1299 cents in memory                          │
//! │    Totals are exact; rounding happens once, at display time            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Wire Format Caveat
//! The external catalog store serves `price` as a plain JSON decimal
//! (`12.99`), and the persisted cart slot carries the same shape. `Price`
//! therefore converts at the serde boundary: decimal in, cents held,
//! decimal out. Everything between the two boundaries is integer math.
//!
//! ## Usage
//! ```rust
//! use bookstall_core::money::Price;
//!
//! let price = Price::from_cents(1299); // $12.99
//!
//! // Arithmetic operations
//! let two = price * 2;                 // $25.98
//! assert_eq!(two.cents(), 2598);
//! assert_eq!(format!("{}", two), "$25.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Price Type
// =============================================================================

/// A monetary value held as cents, exchanged as a decimal.
///
/// ## Design Decisions
/// - **i64 cents**: Exact addition and multiplication, no float drift
/// - **serde via f64**: The catalog wire format and the cart slot use
///   decimal numbers, so conversion lives in `From` impls that serde calls
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default, TS,
)]
#[serde(from = "f64", into = "f64")]
#[ts(export)]
pub struct Price(i64);

impl Price {
    /// Creates a Price from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero price.
    #[inline]
    pub const fn zero() -> Self {
        Price(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies the price by a quantity (line totals).
    #[inline]
    pub const fn times(&self, qty: i64) -> Self {
        Price(self.0 * qty)
    }
}

// =============================================================================
// Wire Conversion
// =============================================================================

/// Decimal → cents, rounding to the nearest cent.
///
/// The catalog store always serves two-fraction-digit decimals, so the
/// rounding only corrects binary representation error (12.99 arrives as
/// 12.989999…, must become 1299 and not 1298).
impl From<f64> for Price {
    fn from(decimal: f64) -> Self {
        Price((decimal * 100.0).round() as i64)
    }
}

/// Cents → decimal for serialization.
impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0 as f64 / 100.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the price in a human-readable format.
///
/// ## Note
/// This is the single place two-fraction-digit rounding becomes visible.
/// Stored and computed values stay in cents.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Addition of two Price values.
impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Price(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Price {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Price(self.0 * qty)
    }
}

/// Summing an iterator of prices (cart totals).
impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(1299);
        assert_eq!(price.cents(), 1299);
        assert_eq!(price.dollars(), 12);
        assert_eq!(price.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Price::from_cents(1299)), "$12.99");
        assert_eq!(format!("{}", Price::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Price::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Price::from_cents(1000);
        let b = Price::from_cents(550);

        assert_eq!((a + b).cents(), 1550);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.times(4).cents(), 4000);
    }

    #[test]
    fn test_sum() {
        let total: Price = [100, 250, 999]
            .into_iter()
            .map(Price::from_cents)
            .sum();
        assert_eq!(total.cents(), 1349);
    }

    /// The nearest double to 12.99 is fractionally below it; naive
    /// truncation would produce 1298 cents.
    #[test]
    fn test_decimal_round_trip() {
        let price = Price::from(12.99);
        assert_eq!(price.cents(), 1299);

        let back: f64 = price.into();
        assert!((back - 12.99).abs() < 1e-9);
    }

    #[test]
    fn test_json_round_trip() {
        let price = Price::from_cents(1299);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "12.99");

        let parsed: Price = serde_json::from_str("12.99").unwrap();
        assert_eq!(parsed, price);

        // Whole-dollar prices arrive without a fraction
        let whole: Price = serde_json::from_str("15").unwrap();
        assert_eq!(whole.cents(), 1500);
    }
}
