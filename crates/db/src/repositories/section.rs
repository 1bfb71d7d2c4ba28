//! Section repository for estimate section database operations.
//!
//! Creation and update are deliberately asymmetric: `create` places the new
//! section through [`NewSection`], which rejects a third hierarchy level;
//! `update` writes the requested parent as-is.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use smeta_core::estimate::{NewSection, Section};
use smeta_shared::{BuildingId, SectionId};
use tracing::{debug, info};

use super::error::StoreError;
use crate::entities::{buildings, expenditures, sections};

/// Input for creating a section.
#[derive(Debug, Clone, Copy)]
pub struct CreateSectionInput {
    /// Owning building.
    pub building_id: BuildingId,
    /// Parent section; `None` creates a root section.
    pub parent_id: Option<SectionId>,
}

/// Input for updating a section.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateSectionInput {
    /// New owning building.
    pub building_id: Option<BuildingId>,
    /// New parent (`Some(None)` detaches the section into a root).
    pub parent_id: Option<Option<SectionId>>,
}

/// Section repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SectionRepository {
    db: DatabaseConnection,
}

impl SectionRepository {
    /// Creates a new section repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a root or child section.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The building or the parent section does not exist
    /// - The parent already has a parent (validation error, nothing is written)
    /// - Database operation fails
    pub async fn create(&self, input: CreateSectionInput) -> Result<sections::Model, StoreError> {
        let txn = self.db.begin().await?;

        ensure_building(&txn, input.building_id).await?;
        let parent: Option<Section> = match input.parent_id {
            Some(parent_id) => Some(find_section(&txn, parent_id).await?.into()),
            None => None,
        };

        let placement = NewSection::under(input.building_id, parent.as_ref())?;

        let now = Utc::now();
        let section = sections::ActiveModel {
            id: Set(SectionId::new().into_inner()),
            building_id: Set(placement.building_id().into_inner()),
            parent_id: Set(placement.parent_id().map(SectionId::into_inner)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let created = section.insert(&txn).await?;
        txn.commit().await?;

        info!(
            section_id = %created.id,
            building_id = %created.building_id,
            parent_id = ?created.parent_id,
            "Section created"
        );
        Ok(created)
    }

    /// Gets a section by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the section does not exist.
    pub async fn get(&self, id: SectionId) -> Result<sections::Model, StoreError> {
        find_section(&self.db, id).await
    }

    /// Lists the sections declared under a building, roots and children alike,
    /// in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_building(
        &self,
        building_id: BuildingId,
    ) -> Result<Vec<sections::Model>, StoreError> {
        let all = sections::Entity::find()
            .filter(sections::Column::BuildingId.eq(building_id.into_inner()))
            .order_by_asc(sections::Column::CreatedAt)
            .order_by_asc(sections::Column::Id)
            .all(&self.db)
            .await?;
        debug!(building_id = %building_id, count = all.len(), "Listed sections");
        Ok(all)
    }

    /// Updates a section's building or parent.
    ///
    /// The nesting depth is not re-checked here. Referenced rows must exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the section, the new building or the
    /// new parent does not exist.
    pub async fn update(
        &self,
        id: SectionId,
        input: UpdateSectionInput,
    ) -> Result<sections::Model, StoreError> {
        let txn = self.db.begin().await?;

        let section = find_section(&txn, id).await?;
        let mut active: sections::ActiveModel = section.into();

        if let Some(building_id) = input.building_id {
            ensure_building(&txn, building_id).await?;
            active.building_id = Set(building_id.into_inner());
        }
        if let Some(parent_id) = input.parent_id {
            if let Some(parent_id) = parent_id {
                find_section(&txn, parent_id).await?;
            }
            active.parent_id = Set(parent_id.map(SectionId::into_inner));
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        info!(
            section_id = %updated.id,
            building_id = %updated.building_id,
            parent_id = ?updated.parent_id,
            "Section updated"
        );
        Ok(updated)
    }

    /// Deletes a section with no child sections and no expenditures.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the section does not exist and
    /// `StoreError::InUse` while children or expenditures reference it.
    pub async fn delete(&self, id: SectionId) -> Result<(), StoreError> {
        find_section(&self.db, id).await?;

        let children = sections::Entity::find()
            .filter(sections::Column::ParentId.eq(id.into_inner()))
            .count(&self.db)
            .await?;
        if children > 0 {
            return Err(StoreError::InUse {
                entity: "Section",
                id: id.into_inner(),
                dependents: "child sections",
            });
        }

        let lines = expenditures::Entity::find()
            .filter(expenditures::Column::SectionId.eq(id.into_inner()))
            .count(&self.db)
            .await?;
        if lines > 0 {
            return Err(StoreError::InUse {
                entity: "Section",
                id: id.into_inner(),
                dependents: "expenditures",
            });
        }

        sections::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::on_delete(e, "Section", id))?;

        info!(section_id = %id, "Section deleted");
        Ok(())
    }
}

pub(crate) async fn find_section<C: ConnectionTrait>(
    db: &C,
    id: SectionId,
) -> Result<sections::Model, StoreError> {
    sections::Entity::find_by_id(id.into_inner())
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found("Section", id))
}

async fn ensure_building<C: ConnectionTrait>(db: &C, id: BuildingId) -> Result<(), StoreError> {
    buildings::Entity::find_by_id(id.into_inner())
        .one(db)
        .await?
        .map(|_| ())
        .ok_or_else(|| StoreError::not_found("Building", id))
}
