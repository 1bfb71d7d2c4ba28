//! `SeaORM` active enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use smeta_core::estimate::ExpenditureType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum ExpenditureKind {
    #[sea_orm(string_value = "work")]
    Work,
    #[sea_orm(string_value = "material")]
    Material,
}

impl From<ExpenditureType> for ExpenditureKind {
    fn from(kind: ExpenditureType) -> Self {
        match kind {
            ExpenditureType::Work => Self::Work,
            ExpenditureType::Material => Self::Material,
        }
    }
}

impl From<ExpenditureKind> for ExpenditureType {
    fn from(kind: ExpenditureKind) -> Self {
        match kind {
            ExpenditureKind::Work => Self::Work,
            ExpenditureKind::Material => Self::Material,
        }
    }
}
