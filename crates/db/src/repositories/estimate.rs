//! Estimate repository: budget rollups, building totals and discounts.
//!
//! Rows are loaded with plain filtered queries and aggregated by
//! `smeta_core::estimate::EstimateService`, so the results do not depend on
//! the backend's support for correlated subqueries.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use smeta_core::estimate::{
    Building, BuildingAmounts, Discount, EstimateService, Expenditure, Section, SectionBudget,
    SectionTree,
};
use smeta_shared::{BuildingId, SectionId};
use tracing::{debug, info};
use uuid::Uuid;

use super::error::StoreError;
use super::section::find_section;
use crate::entities::{buildings, expenditures, sections};

/// Estimate repository for aggregate queries and the discount operation.
#[derive(Debug, Clone)]
pub struct EstimateRepository {
    db: DatabaseConnection,
}

impl EstimateRepository {
    /// Creates a new estimate repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Root sections of a building annotated with `budget_parent`,
    /// `budget_child` and `budget_all`.
    ///
    /// An unknown building has no root sections and yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails, or a validation error
    /// when a total exceeds the decimal range.
    pub async fn parent_sections(
        &self,
        building_id: BuildingId,
    ) -> Result<Vec<SectionBudget>, StoreError> {
        let roots = sections::Entity::find()
            .filter(sections::Column::BuildingId.eq(building_id.into_inner()))
            .filter(sections::Column::ParentId.is_null())
            .order_by_asc(sections::Column::CreatedAt)
            .order_by_asc(sections::Column::Id)
            .all(&self.db)
            .await?;
        if roots.is_empty() {
            return Ok(Vec::new());
        }

        let root_ids: Vec<Uuid> = roots.iter().map(|s| s.id).collect();
        let children = sections::Entity::find()
            .filter(sections::Column::ParentId.is_in(root_ids.clone()))
            .order_by_asc(sections::Column::CreatedAt)
            .order_by_asc(sections::Column::Id)
            .all(&self.db)
            .await?;

        let mut section_ids = root_ids;
        section_ids.extend(children.iter().map(|s| s.id));
        let lines: Vec<Expenditure> = expenditures::Entity::find()
            .filter(expenditures::Column::SectionId.is_in(section_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        let tree = SectionTree::build(
            building_id,
            roots.into_iter().chain(children).map(Section::from),
        );
        let budgets = EstimateService::rollup(&tree, &lines)?;

        debug!(
            building_id = %building_id,
            roots = budgets.len(),
            lines = lines.len(),
            "Computed parent section budgets"
        );
        Ok(budgets)
    }

    /// Work and material totals for every building, zero when empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails, or a validation error
    /// when a total exceeds the decimal range.
    pub async fn building_amounts(&self) -> Result<Vec<BuildingAmounts>, StoreError> {
        let all_buildings: Vec<Building> = buildings::Entity::find()
            .order_by_asc(buildings::Column::CreatedAt)
            .order_by_asc(buildings::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        let all_sections: Vec<Section> = sections::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        let lines: Vec<Expenditure> = expenditures::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        let amounts = EstimateService::building_amounts(&all_buildings, &all_sections, &lines)?;
        debug!(
            buildings = amounts.len(),
            lines = lines.len(),
            "Computed building amounts"
        );
        Ok(amounts)
    }

    /// Reduces the unit price of every expenditure in a section by
    /// `discount_percent`.
    ///
    /// The percentage is validated before the database is touched. Lines are
    /// read with an exclusive row lock and rewritten in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `discount_percent` is outside `0..=100` (validation error)
    /// - Section does not exist
    /// - Database operation fails
    pub async fn apply_discount(
        &self,
        section_id: SectionId,
        discount_percent: Decimal,
    ) -> Result<(), StoreError> {
        let discount = Discount::new(discount_percent)?;

        let txn = self.db.begin().await?;
        find_section(&txn, section_id).await?;

        let lines = expenditures::Entity::find()
            .filter(expenditures::Column::SectionId.eq(section_id.into_inner()))
            .lock_exclusive()
            .all(&txn)
            .await?;

        let now = Utc::now();
        let repriced = lines.len();
        for line in lines {
            let price = discount.apply(line.price);
            let mut active: expenditures::ActiveModel = line.into();
            active.price = Set(price);
            active.updated_at = Set(now.into());
            active.update(&txn).await?;
        }

        txn.commit().await?;

        info!(
            section_id = %section_id,
            discount_percent = %discount.percent(),
            repriced,
            "Discount applied"
        );
        Ok(())
    }
}
