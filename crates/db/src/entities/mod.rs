//! `SeaORM` entity definitions.

pub mod buildings;
pub mod expenditures;
pub mod sea_orm_active_enums;
pub mod sections;
