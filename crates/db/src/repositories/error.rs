//! Error types for repository operations.

use sea_orm::{DbErr, SqlErr};
use smeta_core::estimate::EstimateError;
use smeta_shared::AppError;
use uuid::Uuid;

/// Error types for estimate store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind.
        entity: &'static str,
        /// Requested ID.
        id: Uuid,
    },

    /// Entity cannot be deleted while other rows reference it.
    #[error("{entity} {id} is still referenced by {dependents}")]
    InUse {
        /// Entity kind.
        entity: &'static str,
        /// Entity ID.
        id: Uuid,
        /// What references it.
        dependents: &'static str,
    },

    /// Domain validation failed; nothing was written.
    #[error(transparent)]
    Validation(#[from] EstimateError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<Uuid>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Maps a failed `DELETE`, turning a foreign-key violation into `InUse`.
    pub(crate) fn on_delete(err: DbErr, entity: &'static str, id: impl Into<Uuid>) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::InUse {
                entity,
                id: id.into(),
                dependents: "dependent rows",
            },
            _ => Self::Database(err),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            StoreError::InUse { .. } => Self::Integrity(err.to_string()),
            StoreError::Validation(inner) => inner.into(),
            StoreError::Database(inner) => Self::Database(inner.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smeta_shared::SectionId;

    #[test]
    fn test_maps_to_app_error() {
        let id = SectionId::new();

        let err: AppError = StoreError::not_found("Section", id).into();
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(err.to_string().contains(&id.to_string()));

        let err: AppError = StoreError::InUse {
            entity: "Section",
            id: id.into(),
            dependents: "expenditures",
        }
        .into();
        assert_eq!(err.error_code(), "INTEGRITY_VIOLATION");

        let err: AppError = StoreError::Validation(EstimateError::NestingTooDeep { parent: id }).into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        let err: AppError = StoreError::Database(DbErr::Custom("boom".into())).into();
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_on_delete_passes_other_errors_through() {
        let err = StoreError::on_delete(DbErr::Custom("boom".into()), "Building", Uuid::nil());
        assert!(matches!(err, StoreError::Database(_)));
    }

    /// A raw delete of a referenced row fails on the `RESTRICT` key, and the
    /// failure surfaces as `InUse` rather than a database error.
    #[tokio::test]
    async fn test_on_delete_maps_foreign_key_violation() {
        use chrono::Utc;
        use sea_orm::{ActiveModelTrait, ConnectOptions, Database, EntityTrait, Set};
        use sea_orm_migration::MigratorTrait;

        use crate::entities::{buildings, sections};
        use crate::migration::Migrator;

        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let now = Utc::now();
        let building = buildings::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set("Block A".into()),
            created_at: Set(now.into()),
        }
        .insert(&db)
        .await
        .unwrap();
        let root = sections::ActiveModel {
            id: Set(Uuid::now_v7()),
            building_id: Set(building.id),
            parent_id: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&db)
        .await
        .unwrap();
        sections::ActiveModel {
            id: Set(Uuid::now_v7()),
            building_id: Set(building.id),
            parent_id: Set(Some(root.id)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&db)
        .await
        .unwrap();

        // Bypasses the repository pre-check.
        let db_err = sections::Entity::delete_by_id(root.id)
            .exec(&db)
            .await
            .unwrap_err();
        let err = StoreError::on_delete(db_err, "Section", root.id);
        assert!(matches!(
            err,
            StoreError::InUse { entity: "Section", id, .. } if id == root.id
        ));

        let db_err = buildings::Entity::delete_by_id(building.id)
            .exec(&db)
            .await
            .unwrap_err();
        let err = StoreError::on_delete(db_err, "Building", building.id);
        assert!(matches!(err, StoreError::InUse { entity: "Building", .. }));

        assert!(sections::Entity::find_by_id(root.id).one(&db).await.unwrap().is_some());
    }
}
