//! Fixed-point money type with 2 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so that balances
//! and transaction amounts never pick up floating-point drift.

use crate::error::AmountParseError;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// A monetary amount that always carries exactly 2 decimal places.
///
/// Parsing never rounds: text with sub-cent digits is rejected, so the
/// ledger guards always see the amount that was typed.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use atm_simulator::Money;
///
/// let amount = Money::from_str(" 200.5 ").unwrap();
/// assert_eq!(amount.to_string(), "200.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a new `Money` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Money(normalized)
    }

    /// Creates an amount from a whole number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, Self::SCALE))
    }

    /// Returns `true` if the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns `true` if the amount is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Absolute value, used when rendering debits on a statement.
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Adds two amounts, returning `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money::new)
    }

    /// Subtracts `rhs`, returning `None` on overflow.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Money::new)
    }
}

impl FromStr for Money {
    type Err = AmountParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)?;
        // trailing zeros are fine, "1.500" is still whole cents
        if decimal.normalize().scale() > Self::SCALE {
            return Err(AmountParseError::TooPrecise(trimmed.to_string()));
        }
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes_scale() {
        assert_eq!(Money::from_str("1").unwrap().to_string(), "1.00");
        assert_eq!(Money::from_str("1.5").unwrap().to_string(), "1.50");
        assert_eq!(Money::from_str("  2.25  ").unwrap().to_string(), "2.25");
        assert_eq!(Money::from_str("-40").unwrap().to_string(), "-40.00");
    }

    #[test]
    fn test_from_str_rejects_non_numeric() {
        assert!(Money::from_str("abc").is_err());
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("1.2.3").is_err());
        assert!(Money::from_str("$10").is_err());
    }

    #[test]
    fn test_from_str_rejects_sub_cent_amounts() {
        for input in ["1000.004", "0.004", "0.005", "-0.001"] {
            assert_eq!(
                Money::from_str(input).unwrap_err(),
                AmountParseError::TooPrecise(input.to_string())
            );
        }
        assert!(matches!(
            Money::from_str("abc").unwrap_err(),
            AmountParseError::Invalid(_)
        ));
    }

    #[test]
    fn test_from_str_accepts_trailing_zeros() {
        assert_eq!(Money::from_str("1.500").unwrap(), Money::from_cents(150));
        assert_eq!(Money::from_str("1000.0000").unwrap(), Money::from_cents(100_000));
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(100_000).to_string(), "1000.00");
        assert_eq!(Money::from_cents(5), Money::from_str("0.05").unwrap());
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::from_cents(1).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::from_cents(-1).is_negative());
    }

    #[test]
    fn test_checked_arithmetic_preserves_scale() {
        let a = Money::from_str("1.5").unwrap();
        let b = Money::from_str("2.5").unwrap();

        assert_eq!(a.checked_add(b).unwrap().to_string(), "4.00");
        assert_eq!(b.checked_sub(a).unwrap().to_string(), "1.00");
        assert_eq!(a.checked_sub(b).unwrap().to_string(), "-1.00");
    }

    #[test]
    fn test_checked_add_overflow() {
        let huge = Money::new(Decimal::MAX);
        assert!(huge.checked_add(huge).is_none());
    }

    #[test]
    fn test_neg_and_abs() {
        let amount = Money::from_cents(2_000);
        assert_eq!((-amount).to_string(), "-20.00");
        assert_eq!((-amount).abs(), amount);
    }
}
