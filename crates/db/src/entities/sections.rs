//! `SeaORM` Entity for sections table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use smeta_core::estimate::Section;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub building_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::buildings::Entity",
        from = "Column::BuildingId",
        to = "super::buildings::Column::Id",
        on_delete = "Restrict"
    )]
    Buildings,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_delete = "Restrict"
    )]
    Parent,
    #[sea_orm(has_many = "super::expenditures::Entity")]
    Expenditures,
}

impl Related<super::buildings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Buildings.def()
    }
}

impl Related<super::expenditures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenditures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Section {
    fn from(model: Model) -> Self {
        Self {
            id: model.id.into(),
            building_id: model.building_id.into(),
            parent_id: model.parent_id.map(Into::into),
        }
    }
}
