//! Expenditure repository for line-item database operations.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use smeta_core::estimate::{ExpenditureType, NewExpenditure};
use smeta_shared::{ExpenditureId, SectionId};
use tracing::{debug, info};

use super::error::StoreError;
use super::section::find_section;
use crate::entities::expenditures;

/// Input for creating an expenditure.
#[derive(Debug, Clone)]
pub struct CreateExpenditureInput {
    /// Section the line belongs to. Documented to be a child section; not enforced.
    pub section_id: SectionId,
    /// Line name.
    pub name: String,
    /// Work or material.
    pub kind: ExpenditureType,
    /// Quantity.
    pub count: Decimal,
    /// Unit price.
    pub price: Decimal,
}

/// Expenditure repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ExpenditureRepository {
    db: DatabaseConnection,
}

impl ExpenditureRepository {
    /// Creates a new expenditure repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an expenditure.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Name is blank, or count/price exceed their column precision
    /// - Section does not exist
    /// - Database operation fails
    pub async fn create(
        &self,
        input: CreateExpenditureInput,
    ) -> Result<expenditures::Model, StoreError> {
        let line = NewExpenditure::new(
            input.section_id,
            input.name,
            input.kind,
            input.count,
            input.price,
        )?;

        find_section(&self.db, line.section_id()).await?;

        let now = Utc::now();
        let expenditure = expenditures::ActiveModel {
            id: Set(ExpenditureId::new().into_inner()),
            section_id: Set(line.section_id().into_inner()),
            name: Set(line.name().to_string()),
            kind: Set(line.kind().into()),
            count: Set(line.count()),
            price: Set(line.price()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let created = expenditure.insert(&self.db).await?;
        info!(
            expenditure_id = %created.id,
            section_id = %created.section_id,
            kind = %line.kind(),
            "Expenditure created"
        );
        Ok(created)
    }

    /// Gets an expenditure by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the expenditure does not exist.
    pub async fn get(&self, id: ExpenditureId) -> Result<expenditures::Model, StoreError> {
        expenditures::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or_else(|| StoreError::not_found("Expenditure", id))
    }

    /// Lists the expenditures of a section in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_section(
        &self,
        section_id: SectionId,
    ) -> Result<Vec<expenditures::Model>, StoreError> {
        let lines = expenditures::Entity::find()
            .filter(expenditures::Column::SectionId.eq(section_id.into_inner()))
            .order_by_asc(expenditures::Column::CreatedAt)
            .order_by_asc(expenditures::Column::Id)
            .all(&self.db)
            .await?;
        debug!(section_id = %section_id, count = lines.len(), "Listed expenditures");
        Ok(lines)
    }

    /// Deletes an expenditure.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the expenditure does not exist.
    pub async fn delete(&self, id: ExpenditureId) -> Result<(), StoreError> {
        let result = expenditures::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::on_delete(e, "Expenditure", id))?;

        if result.rows_affected == 0 {
            return Err(StoreError::not_found("Expenditure", id));
        }

        info!(expenditure_id = %id, "Expenditure deleted");
        Ok(())
    }
}
