//! Estimate reports and the discount operation.
//!
//! Usage:
//!   smeta buildings
//!   smeta sections --building <ID>
//!   smeta discount --section <ID> --percent <P>

use clap::Args;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use smeta_db::EstimateRepository;
use smeta_shared::{AppError, BuildingId, SectionId};

use super::print_json;

/// Arguments for `smeta sections`.
#[derive(Debug, Args)]
pub struct SectionsArgs {
    /// Building ID
    #[arg(long)]
    pub building: BuildingId,
}

/// Arguments for `smeta discount`.
#[derive(Debug, Args)]
pub struct DiscountArgs {
    /// Section whose expenditures are repriced
    #[arg(long)]
    pub section: SectionId,

    /// Discount percentage, 0 to 100
    #[arg(long, allow_negative_numbers = true)]
    pub percent: Decimal,
}

/// Prints `{id, works_amount, materials_amount}` for every building.
pub async fn buildings(db: &DatabaseConnection) -> anyhow::Result<()> {
    let amounts = EstimateRepository::new(db.clone())
        .building_amounts()
        .await
        .map_err(AppError::from)?;
    print_json(&amounts)
}

/// Prints the root sections of a building with their budgets.
pub async fn sections(db: &DatabaseConnection, args: SectionsArgs) -> anyhow::Result<()> {
    let budgets = EstimateRepository::new(db.clone())
        .parent_sections(args.building)
        .await
        .map_err(AppError::from)?;
    print_json(&budgets)
}

/// Applies the discount; out-of-range percentages fail before any write.
pub async fn discount(db: &DatabaseConnection, args: DiscountArgs) -> anyhow::Result<()> {
    EstimateRepository::new(db.clone())
        .apply_discount(args.section, args.percent)
        .await
        .map_err(AppError::from)?;
    println!("Discount of {}% applied to section {}", args.percent, args.section);
    Ok(())
}
