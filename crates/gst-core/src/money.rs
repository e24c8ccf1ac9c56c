//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    3 × 33.33 = 99.99000000000001   ❌ WRONG!                            │
//! │                                                                         │
//! │  GST on a subtotal is routinely finer than a paisa:                     │
//! │    99.99 × 9% = 8.9991                                                  │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    3 × 33.33 = 99.99, 99.99 × 9 / 100 = 8.9991 exactly                  │
//! │    Rounding happens once, on the grand total, and the difference        │
//! │    is reported as an explicit round-off line                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gst_core::money::Money;
//!
//! let price = Money::from_paise(3333); // ₹33.33
//! let line = price.multiply_quantity(3);
//! assert_eq!(line, Money::from_paise(9999));
//! assert_eq!(line.to_string(), "₹99.99");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

/// Symbol printed in front of every formatted amount.
pub const RUPEE_SYMBOL: &str = "₹";

// =============================================================================
// Money Type
// =============================================================================

/// A rupee amount with exact decimal precision.
///
/// ## Design Decisions
/// - **Decimal, unscaled**: intermediate tax values keep every digit
///   (8.9991), only display rounds to two places
/// - **Signed**: round-off may be negative
/// - **Transparent serde**: serialized as a decimal string (`"99.99"`)
///
/// ## Where Money is Used
/// ```text
/// LineItem.price ──► LineItem::amount() ──► subtotal ──► CGST / SGST
///                                                │
///                                                ▼
///                               raw total ──► grand total ──► words
///                                     └──────► round off
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Wraps an exact decimal amount in rupees.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a whole-rupee amount.
    ///
    /// ```rust
    /// use gst_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(236).to_string(), "₹236.00");
    /// ```
    #[inline]
    pub fn from_rupees(rupees: i64) -> Self {
        Money(Decimal::from(rupees))
    }

    /// Creates an amount from paise (1/100 rupee).
    ///
    /// ```rust
    /// use gst_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(3333).to_string(), "₹33.33");
    /// assert_eq!(Money::from_paise(-1).to_string(), "-₹0.01");
    /// ```
    #[inline]
    pub fn from_paise(paise: i64) -> Self {
        Money(Decimal::new(paise, 2))
    }

    /// Returns the exact decimal value in rupees.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ```rust
    /// use gst_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(100);
    /// assert_eq!(unit_price.multiply_quantity(2), Money::from_rupees(200));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Applies a percentage tax rate: `amount × rate / 100`.
    ///
    /// No rounding is applied. GST components stay exact so that the
    /// round-off line on the invoice accounts for every fraction of a paisa.
    ///
    /// ```rust
    /// use gst_core::money::Money;
    /// use gst_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_paise(9999);       // ₹99.99
    /// let rate = TaxRate::from_bps(900);            // 9%
    /// assert_eq!(subtotal.apply_rate(rate).amount().normalize().to_string(), "8.9991");
    /// ```
    pub fn apply_rate(&self, rate: TaxRate) -> Money {
        Money(self.0 * rate.percentage() / Decimal::ONE_HUNDRED)
    }

    /// Rounds to the nearest whole rupee, halves rounding up.
    ///
    /// ## Rounding Rule
    /// ```text
    ///   117.9882 → 118      117.5 → 118      117.4999 → 117
    /// ```
    /// For the non-negative totals an invoice produces this is classic
    /// round-half-up, which keeps the round-off in (-0.50, +0.50].
    pub fn round_to_rupee(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Returns the whole-rupee magnitude, if the amount is already integral
    /// and fits in a `u128`.
    pub fn whole_rupees(&self) -> Option<u128> {
        if self.0.fract().is_zero() {
            self.0.abs().to_u128()
        } else {
            None
        }
    }

    /// Rounds to paise for display (two decimal places, halves away from zero).
    pub fn round_to_paise(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Formats as `₹1234.50`; negative values as `-₹0.01`.
///
/// Always two decimal places, no digit grouping.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_paise().0;
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        write!(f, "{}{}{:.2}", sign, RUPEE_SYMBOL, rounded.abs())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
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
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_rupees(236).to_string(), "₹236.00");
        assert_eq!(Money::from_paise(9999).to_string(), "₹99.99");
        assert_eq!(Money::zero().to_string(), "₹0.00");
        assert_eq!(Money::from_decimal(dec("8.9991")).to_string(), "₹9.00");
        assert_eq!(Money::from_decimal(dec("0.0118")).to_string(), "₹0.01");
        assert_eq!(Money::from_decimal(dec("-0.0118")).to_string(), "-₹0.01");
    }

    #[test]
    fn test_display_negative_zero_after_rounding() {
        // -0.001 rounds to 0.00 and must not print a sign
        assert_eq!(Money::from_decimal(dec("-0.001")).to_string(), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(10);
        let b = Money::from_paise(550);

        assert_eq!(a + b, Money::from_paise(1550));
        assert_eq!(a - b, Money::from_paise(450));
        assert_eq!(b * 3, Money::from_paise(1650));

        let mut c = a;
        c += b;
        c -= Money::from_rupees(1);
        assert_eq!(c, Money::from_paise(1450));
    }

    #[test]
    fn test_multiply_quantity_is_exact() {
        let price = Money::from_decimal(dec("33.33"));
        assert_eq!(price.multiply_quantity(3).amount(), dec("99.99"));
    }

    #[test]
    fn test_apply_rate_keeps_sub_paisa_digits() {
        let subtotal = Money::from_decimal(dec("99.99"));
        let tax = subtotal.apply_rate(TaxRate::from_bps(900));
        assert_eq!(tax.amount(), dec("8.9991"));
    }

    #[test]
    fn test_round_to_rupee() {
        assert_eq!(
            Money::from_decimal(dec("117.9882")).round_to_rupee(),
            Money::from_rupees(118)
        );
        assert_eq!(
            Money::from_decimal(dec("117.5")).round_to_rupee(),
            Money::from_rupees(118)
        );
        assert_eq!(
            Money::from_decimal(dec("117.4999")).round_to_rupee(),
            Money::from_rupees(117)
        );
    }

    #[test]
    fn test_whole_rupees() {
        assert_eq!(Money::from_rupees(236).whole_rupees(), Some(236));
        assert_eq!(Money::from_decimal(dec("236.00")).whole_rupees(), Some(236));
        assert_eq!(Money::from_paise(23650).whole_rupees(), None);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Money::from_rupees(1), Money::from_paise(50)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_paise(150));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_paise(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs(), Money::from_rupees(1));
    }

    #[test]
    fn test_serializes_as_decimal_string() {
        let json = serde_json::to_string(&Money::from_paise(9999)).unwrap();
        assert_eq!(json, "\"99.99\"");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::from_paise(9999));
    }
}
