//! Common types used across the application.

pub mod id;
pub mod precision;

pub use id::*;
pub use precision::{COUNT, DecimalSpec, PRICE, PrecisionViolation};
