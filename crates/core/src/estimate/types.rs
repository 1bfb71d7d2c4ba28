//! Estimate data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smeta_shared::{
    BuildingId, ExpenditureId, SectionId,
    types::{COUNT, PRICE},
};

use super::error::EstimateError;

/// Expenditure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenditureType {
    /// Labour.
    Work,
    /// Materials.
    Material,
}

impl ExpenditureType {
    /// Stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Material => "material",
        }
    }
}

impl std::fmt::Display for ExpenditureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExpenditureType {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "material" => Ok(Self::Material),
            _ => Err(EstimateError::UnknownExpenditureType(s.to_string())),
        }
    }
}

/// A construction project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    /// Building ID.
    pub id: BuildingId,
    /// Display name.
    pub name: String,
}

/// A node of the two-level estimate hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section ID.
    pub id: SectionId,
    /// Owning building.
    pub building_id: BuildingId,
    /// Parent section, `None` for a root section.
    pub parent_id: Option<SectionId>,
}

impl Section {
    /// Returns true if the section has no parent.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A priced line item attached to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expenditure {
    /// Expenditure ID.
    pub id: ExpenditureId,
    /// Section the line belongs to.
    pub section_id: SectionId,
    /// Line name.
    pub name: String,
    /// Work or material.
    #[serde(rename = "type")]
    pub kind: ExpenditureType,
    /// Quantity, up to 8 decimal places.
    pub count: Decimal,
    /// Unit price, up to 2 decimal places.
    pub price: Decimal,
}

impl Expenditure {
    /// `count × price`.
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::AmountOverflow` when the product exceeds the
    /// decimal range. Both columns at their widest can do that.
    pub fn line_total(&self) -> Result<Decimal, EstimateError> {
        self.count
            .checked_mul(self.price)
            .ok_or(EstimateError::AmountOverflow("line total"))
    }
}

/// A validated expenditure that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpenditure {
    section_id: SectionId,
    name: String,
    kind: ExpenditureType,
    count: Decimal,
    price: Decimal,
}

impl NewExpenditure {
    /// Validates the line against the stored column definitions.
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::BlankName` for an empty name and
    /// `EstimateError::InvalidAmount` when `count` does not fit `NUMERIC(20, 8)`
    /// or `price` does not fit `NUMERIC(20, 2)`.
    pub fn new(
        section_id: SectionId,
        name: impl Into<String>,
        kind: ExpenditureType,
        count: Decimal,
        price: Decimal,
    ) -> Result<Self, EstimateError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EstimateError::BlankName("Expenditure"));
        }
        COUNT
            .check(count)
            .map_err(|source| EstimateError::InvalidAmount {
                field: "count",
                source,
            })?;
        PRICE
            .check(price)
            .map_err(|source| EstimateError::InvalidAmount {
                field: "price",
                source,
            })?;

        Ok(Self {
            section_id,
            name,
            kind,
            count,
            price,
        })
    }

    /// Target section.
    #[must_use]
    pub const fn section_id(&self) -> SectionId {
        self.section_id
    }

    /// Line name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Work or material.
    #[must_use]
    pub const fn kind(&self) -> ExpenditureType {
        self.kind
    }

    /// Quantity.
    #[must_use]
    pub const fn count(&self) -> Decimal {
        self.count
    }

    /// Unit price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Attaches an identifier, producing the stored shape.
    #[must_use]
    pub fn into_expenditure(self, id: ExpenditureId) -> Expenditure {
        Expenditure {
            id,
            section_id: self.section_id,
            name: self.name,
            kind: self.kind,
            count: self.count,
            price: self.price,
        }
    }
}

/// Validates a building name.
///
/// # Errors
///
/// Returns `EstimateError::BlankName` if the name is empty or whitespace.
pub fn validate_building_name(name: &str) -> Result<(), EstimateError> {
    if name.trim().is_empty() {
        return Err(EstimateError::BlankName("Building"));
    }
    Ok(())
}

/// A root section annotated with its budget rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBudget {
    /// The root section.
    #[serde(flatten)]
    pub section: Section,
    /// Total of expenditures attached directly to the root.
    pub budget_parent: Decimal,
    /// Total of expenditures attached to the root's immediate children.
    pub budget_child: Decimal,
    /// `budget_parent + budget_child`.
    pub budget_all: Decimal,
}

/// Per-building totals split by expenditure type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingAmounts {
    /// Building ID.
    pub id: BuildingId,
    /// Total of `work` expenditures.
    pub works_amount: Decimal,
    /// Total of `material` expenditures.
    pub materials_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_expenditure_type_round_trip_strings() {
        assert_eq!(ExpenditureType::Work.to_string(), "work");
        assert_eq!(
            ExpenditureType::from_str("Material").unwrap(),
            ExpenditureType::Material
        );
        assert!(matches!(
            ExpenditureType::from_str("labour"),
            Err(EstimateError::UnknownExpenditureType(s)) if s == "labour"
        ));
    }

    #[test]
    fn test_line_total() {
        let line = NewExpenditure::new(
            SectionId::new(),
            "Brickwork",
            ExpenditureType::Work,
            dec!(2.5),
            dec!(10.00),
        )
        .unwrap()
        .into_expenditure(ExpenditureId::new());

        assert_eq!(line.line_total().unwrap(), dec!(25.00));
    }

    #[test]
    fn test_line_total_overflow_at_column_limits() {
        // Both values fit their columns; the product does not fit a Decimal.
        let line = NewExpenditure::new(
            SectionId::new(),
            "Oversized",
            ExpenditureType::Material,
            dec!(999999999999.99999999),
            dec!(999999999999999999.99),
        )
        .unwrap()
        .into_expenditure(ExpenditureId::new());

        assert!(matches!(
            line.line_total(),
            Err(EstimateError::AmountOverflow("line total"))
        ));
    }

    #[test]
    fn test_new_expenditure_rejects_blank_name() {
        let err = NewExpenditure::new(
            SectionId::new(),
            "   ",
            ExpenditureType::Material,
            dec!(1),
            dec!(1),
        )
        .unwrap_err();
        assert!(matches!(err, EstimateError::BlankName("Expenditure")));
    }

    #[test]
    fn test_new_expenditure_rejects_sub_cent_price() {
        let err = NewExpenditure::new(
            SectionId::new(),
            "Cement",
            ExpenditureType::Material,
            dec!(1),
            dec!(9.999),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EstimateError::InvalidAmount { field: "price", .. }
        ));
    }

    #[test]
    fn test_new_expenditure_rejects_excess_count_scale() {
        let err = NewExpenditure::new(
            SectionId::new(),
            "Rebar",
            ExpenditureType::Material,
            dec!(0.123456789),
            dec!(1.00),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EstimateError::InvalidAmount { field: "count", .. }
        ));
    }

    #[test]
    fn test_building_name_validation() {
        assert!(validate_building_name("Block A").is_ok());
        assert!(validate_building_name("").is_err());
    }

    #[test]
    fn test_expenditure_serializes_type_field() {
        let line = Expenditure {
            id: ExpenditureId::new(),
            section_id: SectionId::new(),
            name: "Plaster".into(),
            kind: ExpenditureType::Work,
            count: dec!(1),
            price: dec!(3.50),
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["type"], "work");
    }
}
