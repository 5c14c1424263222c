//! # Money Module
//!
//! Provides the `Money` type used by every bill and VAT calculation.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    35000 cents × 20% = 7000 cents, exactly                              │
//! │    5500 cents × 25% = 1375 cents, exactly                               │
//! │    Anything fractional is rounded half-up, once, at the end             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use billing_core::money::Money;
//! use billing_core::types::Percent;
//!
//! let unit_price = Money::from_cents(1000);
//! let line_total = unit_price.multiply_quantity(5);
//! assert_eq!(line_total.cents(), 5000);
//!
//! let vat = Money::from_cents(5500).percentage(Percent::new(25)?);
//! assert_eq!(vat.cents(), 1375);
//! # Ok::<(), billing_core::ValidationError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

use crate::types::Percent;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction of a discount can never wrap around
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a bare integer
///
/// ## Where Money Flows
/// ```text
/// Product.unit_price ──► Item line total ──► Bill subtotal ──► Discount
///
/// Goods price basis ──► net price ──┬──────────────────────► gross price
///                                   └──► VAT (rate lookup) ──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use billing_core::money::Money;
    ///
    /// let price = Money::from_cents(35000);
    /// assert_eq!(price.cents(), 35000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ```rust
    /// use billing_core::money::Money;
    ///
    /// let line_total = Money::from_cents(10000).multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 30000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Returns `rate` percent of this amount, rounded half-up to whole cents.
    ///
    /// ## Rounding
    /// Integer math through i128: `(amount × pct ± 50) / 100`, with the half
    /// added away from zero. This matches fixed-point decimal arithmetic at
    /// scale 0 with `HALF_UP`.
    ///
    /// ```text
    /// 35000 × 20% = 7000        (exact)
    ///  5500 × 25% = 1375        (exact)
    ///   150 × 15% =   22.5 → 23 (half goes up)
    /// ```
    pub fn percentage(&self, rate: Percent) -> Money {
        let scaled = self.0 as i128 * rate.value() as i128;
        Money::from_cents(div_round_half_up(scaled, 100) as i64)
    }

    /// Subtracts `rate` percent from this amount.
    ///
    /// The discount itself is rounded half-up before subtracting, so a 30%
    /// coupon on 35000 removes exactly 10500.
    ///
    /// ```rust
    /// use billing_core::money::Money;
    /// use billing_core::types::Percent;
    ///
    /// let subtotal = Money::from_cents(35000);
    /// let discounted = subtotal.apply_percentage_discount(Percent::new(30)?);
    /// assert_eq!(discounted.cents(), 24500);
    /// # Ok::<(), billing_core::ValidationError>(())
    /// ```
    pub fn apply_percentage_discount(&self, rate: Percent) -> Money {
        *self - self.percentage(rate)
    }
}

/// Integer division rounding halves away from zero.
fn div_round_half_up(numerator: i128, denominator: i128) -> i128 {
    let half = denominator / 2;
    if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        (numerator - half) / denominator
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$350.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Truncating division, used for "half price" style splits.
impl Div<i64> for Money {
    type Output = Self;

    #[inline]
    fn div(self, divisor: i64) -> Self {
        Money(self.0 / divisor)
    }
}

/// Summing an empty iterator yields zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
