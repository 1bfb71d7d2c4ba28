//! Building repository for building database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use smeta_core::estimate::validate_building_name;
use smeta_shared::BuildingId;
use tracing::{debug, info};

use super::error::StoreError;
use crate::entities::{buildings, sections};

/// Building repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct BuildingRepository {
    db: DatabaseConnection,
}

impl BuildingRepository {
    /// Creates a new building repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new building.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name, or a database error.
    pub async fn create(&self, name: &str) -> Result<buildings::Model, StoreError> {
        validate_building_name(name)?;

        let building = buildings::ActiveModel {
            id: Set(BuildingId::new().into_inner()),
            name: Set(name.to_string()),
            created_at: Set(Utc::now().into()),
        };

        let created = building.insert(&self.db).await?;
        info!(building_id = %created.id, name = %created.name, "Building created");
        Ok(created)
    }

    /// Gets a building by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the building does not exist.
    pub async fn get(&self, id: BuildingId) -> Result<buildings::Model, StoreError> {
        buildings::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or_else(|| StoreError::not_found("Building", id))
    }

    /// Lists all buildings in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<buildings::Model>, StoreError> {
        let all = buildings::Entity::find()
            .order_by_asc(buildings::Column::CreatedAt)
            .order_by_asc(buildings::Column::Id)
            .all(&self.db)
            .await?;
        debug!(count = all.len(), "Listed buildings");
        Ok(all)
    }

    /// Renames a building.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the building does not exist, or a
    /// validation error for a blank name.
    pub async fn rename(&self, id: BuildingId, name: &str) -> Result<buildings::Model, StoreError> {
        validate_building_name(name)?;
        let building = self.get(id).await?;

        let mut active: buildings::ActiveModel = building.into();
        active.name = Set(name.to_string());

        let updated = active.update(&self.db).await?;
        info!(building_id = %updated.id, name = %updated.name, "Building renamed");
        Ok(updated)
    }

    /// Deletes a building that owns no sections.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the building does not exist and
    /// `StoreError::InUse` while any section references it.
    pub async fn delete(&self, id: BuildingId) -> Result<(), StoreError> {
        self.get(id).await?;

        let dependents = sections::Entity::find()
            .filter(sections::Column::BuildingId.eq(id.into_inner()))
            .count(&self.db)
            .await?;
        if dependents > 0 {
            return Err(StoreError::InUse {
                entity: "Building",
                id: id.into_inner(),
                dependents: "sections",
            });
        }

        buildings::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::on_delete(e, "Building", id))?;

        info!(building_id = %id, "Building deleted");
        Ok(())
    }
}
