//! Budget rollups over loaded estimate rows.

use std::collections::HashMap;

use rust_decimal::Decimal;
use smeta_shared::{BuildingId, SectionId};

use super::error::EstimateError;
use super::hierarchy::SectionTree;
use super::types::{Building, BuildingAmounts, Expenditure, ExpenditureType, Section, SectionBudget};

/// Estimate service for aggregate calculations.
///
/// Sums use checked arithmetic: values that fit their columns can still
/// overflow `Decimal` once multiplied or accumulated.
pub struct EstimateService;

impl EstimateService {
    /// Sums `count × price` per section.
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::AmountOverflow` if a line or section total
    /// exceeds the decimal range.
    pub fn section_totals(
        expenditures: &[Expenditure],
    ) -> Result<HashMap<SectionId, Decimal>, EstimateError> {
        let mut totals: HashMap<SectionId, Decimal> = HashMap::new();
        for line in expenditures {
            let total = totals.entry(line.section_id).or_insert(Decimal::ZERO);
            *total = checked_add(*total, line.line_total()?, "section total")?;
        }
        Ok(totals)
    }

    /// Annotates every root section of `tree` with its budget rollup.
    ///
    /// `budget_parent` covers lines attached to the root itself, `budget_child`
    /// covers lines attached to its immediate children. Both start at zero, so
    /// a root with no lines of its own still reports its children's total in
    /// `budget_all`.
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::AmountOverflow` if any total exceeds the
    /// decimal range.
    pub fn rollup(
        tree: &SectionTree,
        expenditures: &[Expenditure],
    ) -> Result<Vec<SectionBudget>, EstimateError> {
        let totals = Self::section_totals(expenditures)?;
        let total_of = |id: SectionId| totals.get(&id).copied().unwrap_or(Decimal::ZERO);

        tree.roots()
            .iter()
            .map(|root| {
                let budget_parent = total_of(root.id());
                let budget_child = root
                    .child_ids()
                    .map(total_of)
                    .try_fold(Decimal::ZERO, |acc, t| checked_add(acc, t, "budget_child"))?;

                Ok(SectionBudget {
                    section: root.section,
                    budget_parent,
                    budget_child,
                    budget_all: checked_add(budget_parent, budget_child, "budget_all")?,
                })
            })
            .collect()
    }

    /// Totals work and material lines per building.
    ///
    /// Every building in `buildings` gets a record, with zeros when nothing is
    /// attached. A line counts toward the building declared on its own section;
    /// lines whose section is not in `sections` are skipped.
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::AmountOverflow` if any total exceeds the
    /// decimal range.
    pub fn building_amounts(
        buildings: &[Building],
        sections: &[Section],
        expenditures: &[Expenditure],
    ) -> Result<Vec<BuildingAmounts>, EstimateError> {
        let building_of: HashMap<SectionId, BuildingId> =
            sections.iter().map(|s| (s.id, s.building_id)).collect();

        let mut amounts: HashMap<BuildingId, (Decimal, Decimal)> = HashMap::new();
        for line in expenditures {
            let Some(building_id) = building_of.get(&line.section_id) else {
                continue;
            };
            let entry = amounts
                .entry(*building_id)
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            let line_total = line.line_total()?;
            match line.kind {
                ExpenditureType::Work => {
                    entry.0 = checked_add(entry.0, line_total, "works_amount")?;
                }
                ExpenditureType::Material => {
                    entry.1 = checked_add(entry.1, line_total, "materials_amount")?;
                }
            }
        }

        Ok(buildings
            .iter()
            .map(|b| {
                let (works_amount, materials_amount) = amounts
                    .get(&b.id)
                    .copied()
                    .unwrap_or((Decimal::ZERO, Decimal::ZERO));
                BuildingAmounts {
                    id: b.id,
                    works_amount,
                    materials_amount,
                }
            })
            .collect())
    }
}

fn checked_add(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal, EstimateError> {
    a.checked_add(b).ok_or(EstimateError::AmountOverflow(what))
}
