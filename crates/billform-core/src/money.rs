//! # Money Module
//!
//! Provides the `Amount` type for monetary values and the 2-decimal
//! rounding rule used at every computation stage.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Form inputs carry fractional amounts (unit price 3.335, qty 1.5),     │
//! │  so integer cents alone cannot represent the raw values. We use        │
//! │  rust_decimal: exact base-10 arithmetic, then explicit half-up         │
//! │  rounding to 2 places at each derivation stage.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stage-Wise Rounding Contract
//! Derived amounts round BEFORE they feed the next stage:
//! net is rounded, tax is computed from the *rounded* net, and the total
//! is rounded again. This is a deliberate behavioral contract, not an
//! approximation - see [`crate::compute`].

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Rounding
// =============================================================================

/// Rounds a decimal to 2 places using standard half-up rounding
/// (midpoint away from zero), the rule the whole computation engine uses.
///
/// The result always carries exactly two fractional digits, so `25`
/// becomes `25.00` when displayed or serialized.
///
/// ## Example
/// ```rust
/// use billform_core::money::round2;
/// use rust_decimal::Decimal;
///
/// let v: Decimal = "10.005".parse().unwrap();
/// assert_eq!(round2(v).to_string(), "10.01");
/// ```
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary value rounded to 2 decimal places.
///
/// ## Design Decisions
/// - **Decimal inner value**: exact base-10 arithmetic, no binary drift
/// - **Rounded on construction**: an `Amount` is always at presentation
///   precision; raw form inputs stay plain `Decimal` until derived
/// - **Single field tuple struct**: zero-cost abstraction over `Decimal`
///
/// Every derived monetary value in the system (net, tax, total, aggregate
/// sums) flows through this type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Amount(#[ts(as = "String")] Decimal);

impl Amount {
    /// Creates an amount from a raw decimal, applying half-up rounding
    /// to 2 places.
    ///
    /// ## Example
    /// ```rust
    /// use billform_core::money::Amount;
    /// use rust_decimal::Decimal;
    ///
    /// let amount = Amount::from_decimal("4.505".parse::<Decimal>().unwrap());
    /// assert_eq!(amount.to_string(), "4.51");
    /// ```
    pub fn from_decimal(value: Decimal) -> Self {
        Amount(round2(value))
    }

    /// Returns the inner decimal value (2-place precision).
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Amount(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

/// Display shows the canonical 2-decimal rendering ("29.50").
///
/// Currency symbols are a presentation concern; the export collaborator
/// adds them where its layout wants them.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Addition of two amounts. Both operands are already at 2-place
/// precision, so the sum is exact.
impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

/// Summing amounts re-applies the 2-place rule, matching the aggregate
/// totals contract (sums of rounded values, themselves rounded).
impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        Amount::from_decimal(iter.map(|a| a.0).sum())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
