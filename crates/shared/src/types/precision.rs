//! Decimal precision specs for stored quantities and prices.
//!
//! Never use floating-point for estimate arithmetic. Values are
//! `rust_decimal::Decimal` and are checked against the column precision
//! before they reach the database.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Precision of a fixed-point decimal column (`NUMERIC(max_digits, decimal_places)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalSpec {
    /// Total number of significant digits.
    pub max_digits: u32,
    /// Digits after the decimal point.
    pub decimal_places: u32,
}

/// Expenditure quantity: `NUMERIC(20, 8)`.
pub const COUNT: DecimalSpec = DecimalSpec::new(20, 8);

/// Expenditure unit price: `NUMERIC(20, 2)`.
pub const PRICE: DecimalSpec = DecimalSpec::new(20, 2);

/// A value that does not fit a [`DecimalSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrecisionViolation {
    /// More fractional digits than the column stores.
    #[error("at most {max} decimal places allowed, got {got}")]
    TooManyDecimalPlaces {
        /// Allowed decimal places.
        max: u32,
        /// Decimal places in the value.
        got: u32,
    },

    /// More integer digits than the column stores.
    #[error("at most {max} integer digits allowed, got {got}")]
    TooManyIntegerDigits {
        /// Allowed integer digits.
        max: u32,
        /// Integer digits in the value.
        got: u32,
    },
}

impl DecimalSpec {
    /// Creates a new spec.
    #[must_use]
    pub const fn new(max_digits: u32, decimal_places: u32) -> Self {
        Self {
            max_digits,
            decimal_places,
        }
    }

    /// Number of digits allowed before the decimal point.
    #[must_use]
    pub const fn integer_digits(&self) -> u32 {
        self.max_digits - self.decimal_places
    }

    /// Checks that `value` is representable without rounding.
    ///
    /// Trailing fractional zeros are ignored, so `10.000` fits `NUMERIC(20, 2)`.
    ///
    /// # Errors
    ///
    /// Returns a [`PrecisionViolation`] when the value has too many
    /// fractional or integer digits.
    pub fn check(&self, value: Decimal) -> Result<(), PrecisionViolation> {
        let scale = value.normalize().scale();
        if scale > self.decimal_places {
            return Err(PrecisionViolation::TooManyDecimalPlaces {
                max: self.decimal_places,
                got: scale,
            });
        }

        let integer = value.trunc().abs().normalize();
        let digits = if integer.is_zero() {
            0
        } else {
            u32::try_from(integer.to_string().len()).unwrap_or(u32::MAX)
        };
        if digits > self.integer_digits() {
            return Err(PrecisionViolation::TooManyIntegerDigits {
                max: self.integer_digits(),
                got: digits,
            });
        }

        Ok(())
    }

    /// Rounds `value` to the stored scale, midpoint away from zero.
    ///
    /// This matches how PostgreSQL rounds on assignment to a `NUMERIC` column.
    #[must_use]
    pub fn quantize(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_accepts_two_places() {
        assert!(PRICE.check(dec!(199.99)).is_ok());
        assert!(PRICE.check(dec!(10.000)).is_ok());
        assert!(PRICE.check(dec!(0)).is_ok());
    }

    #[test]
    fn test_price_rejects_three_places() {
        assert_eq!(
            PRICE.check(dec!(1.005)),
            Err(PrecisionViolation::TooManyDecimalPlaces { max: 2, got: 3 })
        );
    }

    #[test]
    fn test_count_integer_digits() {
        assert!(COUNT.check(dec!(999999999999.12345678)).is_ok());
        assert_eq!(
            COUNT.check(dec!(1000000000000)),
            Err(PrecisionViolation::TooManyIntegerDigits { max: 12, got: 13 })
        );
    }

    #[test]
    fn test_negative_values_use_magnitude() {
        assert!(PRICE.check(dec!(-12.50)).is_ok());
        assert!(PRICE.check(dec!(-0.001)).is_err());
    }

    #[test]
    fn test_quantize_midpoint_away_from_zero() {
        assert_eq!(PRICE.quantize(dec!(2.345)), dec!(2.35));
        assert_eq!(PRICE.quantize(dec!(2.355)), dec!(2.36));
        assert_eq!(PRICE.quantize(dec!(-2.345)), dec!(-2.35));
        assert_eq!(PRICE.quantize(dec!(180.0000)).scale(), 2);
    }
}
