//! Percentage discounts on unit prices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smeta_shared::types::PRICE;

use super::error::EstimateError;

/// A validated discount in percent, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Discount(Decimal);

impl Discount {
    /// Validates the percentage.
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::DiscountOutOfRange` unless `0 <= percent <= 100`.
    pub fn new(percent: Decimal) -> Result<Self, EstimateError> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(EstimateError::DiscountOutOfRange(percent));
        }
        Ok(Self(percent))
    }

    /// The percentage.
    #[must_use]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    /// Discounted unit price, rounded to the stored two decimal places.
    ///
    /// `price - price / 100 * percent`
    #[must_use]
    pub fn apply(&self, price: Decimal) -> Decimal {
        let discount_amount = price / Decimal::ONE_HUNDRED * self.0;
        PRICE.quantize(price - discount_amount)
    }
}

impl TryFrom<Decimal> for Discount {
    type Error = EstimateError;

    fn try_from(percent: Decimal) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<Discount> for Decimal {
    fn from(discount: Discount) -> Self {
        discount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(200.00), dec!(10), dec!(180.00))]
    #[case(dec!(200.00), dec!(0), dec!(200.00))]
    #[case(dec!(200.00), dec!(100), dec!(0.00))]
    #[case(dec!(19.99), dec!(50), dec!(10.00))]
    #[case(dec!(33.33), dec!(7), dec!(31.00))]
    #[case(dec!(0.01), dec!(50), dec!(0.01))]
    #[case(dec!(10.00), dec!(12.5), dec!(8.75))]
    fn test_apply(#[case] price: Decimal, #[case] percent: Decimal, #[case] expected: Decimal) {
        let discounted = Discount::new(percent).unwrap().apply(price);
        assert_eq!(discounted, expected);
        assert!(discounted.scale() <= 2);
    }

    #[rstest]
    #[case(dec!(-1))]
    #[case(dec!(-0.01))]
    #[case(dec!(100.01))]
    #[case(dec!(150))]
    fn test_out_of_range(#[case] percent: Decimal) {
        assert!(matches!(
            Discount::new(percent),
            Err(EstimateError::DiscountOutOfRange(p)) if p == percent
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Discount = serde_json::from_str("\"25\"").unwrap();
        assert_eq!(ok.percent(), dec!(25));
        assert!(serde_json::from_str::<Discount>("\"101\"").is_err());
    }
}
