//! # Money Module
//!
//! Provides the `Money` type for prices, line costs and checkout totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64 prices:                                                       │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  Checkout must report total = Σ(unit price × quantity) EXACTLY.         │
//! │  Integer cents make that sum exact for any realistic cart.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantities come straight from the shopper and may be huge or negative,
//! so arithmetic is checked: an amount that does not fit in `i64` cents is
//! `None`, never a panic or a wrapped value.
//!
//! ## Usage
//! ```rust
//! use shopfront_core::money::Money;
//!
//! let price = Money::from_major_minor(800, 0); // $800.00
//! let line = price.checked_mul(2).unwrap();
//! assert_eq!(line.to_string(), "$1600.00");
//! assert!(price.checked_mul(i64::MAX).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary value in the smallest currency unit (cents).
///
/// Signed so that the line cost of a non-positive purchase quantity is
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Unit price × quantity, or `None` if the result overflows.
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Laptop $800.00
    /// Quantity: 2
    ///      │
    ///      ▼
    /// checked_mul(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Cost: $1600.00
    /// ```
    #[inline]
    pub const fn checked_mul(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Sum of two amounts, or `None` if it overflows.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Renders as `<sign><symbol><dollars>.<cents>`, e.g. `-€12.34`.
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-1234).format_with_symbol("€"), "-€12.34");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!(
            "{}{}{}.{:02}",
            if self.is_negative() { "-" } else { "" },
            symbol,
            self.dollars().unsigned_abs(),
            self.cents_part()
        )
    }
}

/// Renders with a `$` symbol. The console uses its configured symbol via
/// [`Money::format_with_symbol`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
