//! `SeaORM` Entity for buildings table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use smeta_core::estimate::Building;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "buildings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sections::Entity")]
    Sections,
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Building {
    fn from(model: Model) -> Self {
        Self {
            id: model.id.into(),
            name: model.name,
        }
    }
}
