//! Shared fixtures for repository integration tests.

#![allow(dead_code)]

use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use smeta_core::estimate::ExpenditureType;
use smeta_db::{
    BuildingRepository, EstimateRepository, ExpenditureRepository, SectionRepository,
    entities::{buildings, expenditures, sections},
    migration::Migrator,
    repositories::{CreateExpenditureInput, CreateSectionInput},
};
use smeta_shared::{BuildingId, SectionId};

/// Fresh in-memory database with the schema applied.
///
/// A single pooled connection keeps every query on the same in-memory file.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// All repositories over one connection.
pub struct Repos {
    pub buildings: BuildingRepository,
    pub sections: SectionRepository,
    pub expenditures: ExpenditureRepository,
    pub estimate: EstimateRepository,
}

impl Repos {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            buildings: BuildingRepository::new(db.clone()),
            sections: SectionRepository::new(db.clone()),
            expenditures: ExpenditureRepository::new(db.clone()),
            estimate: EstimateRepository::new(db.clone()),
        }
    }

    pub async fn building(&self, name: &str) -> buildings::Model {
        self.buildings
            .create(name)
            .await
            .expect("Failed to create building")
    }

    pub async fn root(&self, building: &buildings::Model) -> sections::Model {
        self.sections
            .create(CreateSectionInput {
                building_id: BuildingId::from_uuid(building.id),
                parent_id: None,
            })
            .await
            .expect("Failed to create root section")
    }

    pub async fn child(
        &self,
        building: &buildings::Model,
        parent: &sections::Model,
    ) -> sections::Model {
        self.sections
            .create(CreateSectionInput {
                building_id: BuildingId::from_uuid(building.id),
                parent_id: Some(SectionId::from_uuid(parent.id)),
            })
            .await
            .expect("Failed to create child section")
    }

    pub async fn line(
        &self,
        section: &sections::Model,
        kind: ExpenditureType,
        count: Decimal,
        price: Decimal,
    ) -> expenditures::Model {
        self.expenditures
            .create(CreateExpenditureInput {
                section_id: SectionId::from_uuid(section.id),
                name: format!("{kind} line"),
                kind,
                count,
                price,
            })
            .await
            .expect("Failed to create expenditure")
    }
}
