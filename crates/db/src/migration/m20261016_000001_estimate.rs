//! Estimate schema: buildings, sections and expenditures.
//!
//! Every foreign key is `ON DELETE RESTRICT`; referenced rows cannot be
//! removed while dependents exist.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        manager
            .create_table(
                Table::create()
                    .table(Buildings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Buildings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Buildings::Name).string().not_null())
                    .col(
                        ColumnDef::new(Buildings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sections::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sections::BuildingId).uuid().not_null())
                    .col(ColumnDef::new(Sections::ParentId).uuid().null())
                    .col(
                        ColumnDef::new(Sections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Sections::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sections_building")
                            .from(Sections::Table, Sections::BuildingId)
                            .to(Buildings::Table, Buildings::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sections_parent")
                            .from(Sections::Table, Sections::ParentId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Expenditures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenditures::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenditures::SectionId).uuid().not_null())
                    .col(ColumnDef::new(Expenditures::Name).string().not_null())
                    .col(
                        ColumnDef::new(Expenditures::Type)
                            .string_len(8)
                            .not_null()
                            .check(Expr::col(Expenditures::Type).is_in(["work", "material"])),
                    )
                    .col(fixed_point(backend, Expenditures::Count, 20, 8))
                    .col(fixed_point(backend, Expenditures::Price, 20, 2))
                    .col(
                        ColumnDef::new(Expenditures::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Expenditures::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expenditures_section")
                            .from(Expenditures::Table, Expenditures::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Root sections of a building
        manager
            .create_index(
                Index::create()
                    .name("idx_sections_building_parent")
                    .table(Sections::Table)
                    .col(Sections::BuildingId)
                    .col(Sections::ParentId)
                    .to_owned(),
            )
            .await?;

        // Children of a root
        manager
            .create_index(
                Index::create()
                    .name("idx_sections_parent")
                    .table(Sections::Table)
                    .col(Sections::ParentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_expenditures_section")
                    .table(Expenditures::Table)
                    .col(Expenditures::SectionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expenditures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Buildings::Table).to_owned())
            .await
    }
}

/// `NUMERIC(precision, scale)` on PostgreSQL. SQLite has no fixed-point type,
/// so the column is declared without precision there.
fn fixed_point(
    backend: DatabaseBackend,
    column: Expenditures,
    precision: u32,
    scale: u32,
) -> ColumnDef {
    let mut def = ColumnDef::new(column);
    match backend {
        DatabaseBackend::Sqlite => def.decimal(),
        _ => def.decimal_len(precision, scale),
    };
    def.not_null();
    def
}

#[derive(DeriveIden)]
enum Buildings {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Sections {
    Table,
    Id,
    BuildingId,
    ParentId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Expenditures {
    Table,
    Id,
    SectionId,
    Name,
    Type,
    Count,
    Price,
    CreatedAt,
    UpdatedAt,
}
