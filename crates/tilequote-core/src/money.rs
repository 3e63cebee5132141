//! # Money Module
//!
//! Provides the `Money` and `Percent` types used by every cost line.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A QUOTE IS AN ESTIMATE, NOT A LEDGER                                   │
//! │                                                                         │
//! │  Material and labour lines are area × rate:                             │
//! │    13.37 m² × £8.00/m² = £106.96                                        │
//! │                                                                         │
//! │  Rounding each line to pence before summing would make the grand        │
//! │  total depend on line order and grouping. Instead:                      │
//! │    • every line is carried at full f64 precision                        │
//! │    • totals are summed from unrounded lines                             │
//! │    • rounding to pence happens ONLY when displayed (`Display`)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tilequote_core::money::{Money, Percent};
//!
//! let subtotal = Money::new(1000.0);
//! let margin = Percent::new(20.0).of(subtotal);
//! assert_eq!(margin, Money::new(200.0));
//! assert_eq!((subtotal + margin).to_string(), "£1200.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in pounds sterling.
///
/// ## Design Decisions
/// - **f64**: Quote lines are products of measured areas and unit rates
/// - **Single field tuple struct**: Zero-cost abstraction over f64
/// - **Newtype serde**: Stored as a plain JSON number
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value from an amount in pounds.
    ///
    /// Non-finite input (NaN, infinity) collapses to zero so a bad entry can
    /// never poison a total.
    #[inline]
    pub fn new(pounds: f64) -> Self {
        if pounds.is_finite() {
            Money(pounds)
        } else {
            Money(0.0)
        }
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Returns the amount in pounds.
    #[inline]
    pub const fn pounds(&self) -> f64 {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Price of `count` discrete units (bags, sheets, tubs...) at this unit price.
    ///
    /// ## Example
    /// ```rust
    /// use tilequote_core::money::Money;
    ///
    /// let per_bag = Money::new(15.0);
    /// assert_eq!(per_bag.times(3), Money::new(45.0));
    /// ```
    #[inline]
    pub fn times(&self, count: u64) -> Money {
        Money(self.0 * count as f64)
    }

    /// Cost of a measured quantity (m², kg...) at this per-unit rate.
    #[inline]
    pub fn per(&self, quantity: f64) -> Money {
        Money::new(self.0 * quantity)
    }

    /// Rounds to whole pence, for comparisons against displayed figures.
    pub fn rounded_to_pence(&self) -> Money {
        Money((self.0 * 100.0).round() / 100.0)
    }
}

/// Displays as `£1234.56`.
///
/// ## Note
/// No thousands separators: the output goes into plain-text messages that
/// the customer may copy into other tools.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded_to_pence().0;
        if rounded < 0.0 {
            write!(f, "-£{:.2}", -rounded)
        } else {
            // `+ 0.0` folds a negative zero into positive zero
            write!(f, "£{:.2}", rounded + 0.0)
        }
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<f64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f64) -> Self {
        Money::new(self.0 * factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

// =============================================================================
// Percent
// =============================================================================

/// A percentage rate, e.g. `Percent::new(20.0)` is 20%.
///
/// Used for the contractor margin and the VAT rate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(f64);

impl Percent {
    /// Creates a percentage. Non-finite input becomes 0%.
    #[inline]
    pub fn new(pct: f64) -> Self {
        if pct.is_finite() {
            Percent(pct)
        } else {
            Percent(0.0)
        }
    }

    /// Returns the rate as a percentage value (20.0 for 20%).
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Applies the rate to an amount: `amount × pct / 100`.
    #[inline]
    pub fn of(&self, amount: Money) -> Money {
        Money::new(amount.pounds() * self.0 / 100.0)
    }
}

/// Displays without trailing zeros: `20%`, `17.5%`.
impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
