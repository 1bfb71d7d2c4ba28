//! `SeaORM` Entity for expenditures table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use smeta_core::estimate::Expenditure;

use super::sea_orm_active_enums::ExpenditureKind;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "expenditures")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub section_id: Uuid,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub kind: ExpenditureKind,
    #[sea_orm(column_type = "Decimal(Some((20, 8)))")]
    pub count: Decimal,
    #[sea_orm(column_type = "Decimal(Some((20, 2)))")]
    pub price: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sections::Entity",
        from = "Column::SectionId",
        to = "super::sections::Column::Id",
        on_delete = "Restrict"
    )]
    Sections,
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Expenditure {
    fn from(model: Model) -> Self {
        Self {
            id: model.id.into(),
            section_id: model.section_id.into(),
            name: model.name,
            kind: model.kind.into(),
            count: model.count,
            price: model.price,
        }
    }
}
