//! Construction estimates: buildings, a two-level section hierarchy and
//! priced line items.
//!
//! The module is split along the operations the store layer exposes:
//! - `hierarchy` - section placement rules and the root/child tree
//! - `service` - budget rollups per root section and per building
//! - `discount` - percentage price reductions

pub mod discount;
pub mod error;
pub mod hierarchy;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use discount::Discount;
pub use error::EstimateError;
pub use hierarchy::{NewSection, RootSection, SectionTree};
pub use service::EstimateService;
pub use types::{
    Building, BuildingAmounts, Expenditure, ExpenditureType, NewExpenditure, Section,
    SectionBudget, validate_building_name,
};
