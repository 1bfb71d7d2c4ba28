//! Estimate error types.

use rust_decimal::Decimal;
use smeta_shared::{AppError, SectionId, types::PrecisionViolation};
use thiserror::Error;

/// Estimate validation errors.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The designated parent is itself a child section.
    #[error("Maximum section nesting depth is 2: section {parent} already has a parent")]
    NestingTooDeep {
        /// The section that was offered as parent.
        parent: SectionId,
    },

    /// Discount percent outside `0..=100`.
    #[error("Discount must be between 0 and 100 percent, got {0}")]
    DiscountOutOfRange(Decimal),

    /// Quantity or price does not fit its column.
    #[error("Invalid {field}: {source}")]
    InvalidAmount {
        /// Field name (`count` or `price`).
        field: &'static str,
        /// Precision that was exceeded.
        source: PrecisionViolation,
    },

    /// Name is empty or whitespace.
    #[error("{0} name must not be blank")]
    BlankName(&'static str),

    /// A total exceeds the decimal range.
    #[error("Amount overflow while computing {0}")]
    AmountOverflow(&'static str),

    /// Unrecognised expenditure type string.
    #[error("Unknown expenditure type: {0}")]
    UnknownExpenditureType(String),
}

impl From<EstimateError> for AppError {
    fn from(err: EstimateError) -> Self {
        Self::Validation(err.to_string())
    }
}
