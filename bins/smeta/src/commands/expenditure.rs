//! Expenditure management commands
//!
//! Usage: smeta expenditure <add|list|rm>

use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use smeta_core::estimate::ExpenditureType;
use smeta_db::{ExpenditureRepository, repositories::CreateExpenditureInput};
use smeta_shared::{AppError, ExpenditureId, SectionId};

use super::print_json;

/// Arguments for `smeta expenditure`.
#[derive(Debug, Args)]
pub struct ExpenditureArgs {
    #[command(subcommand)]
    pub command: ExpenditureCommand,
}

/// Expenditure subcommands.
#[derive(Debug, Subcommand)]
pub enum ExpenditureCommand {
    /// Add a line item to a section
    Add(AddArgs),
    /// List the line items of a section
    List {
        /// Section ID
        #[arg(long)]
        section: SectionId,
    },
    /// Delete a line item
    Rm {
        /// Expenditure ID
        id: ExpenditureId,
    },
}

/// Arguments for `smeta expenditure add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Owning section
    #[arg(long)]
    pub section: SectionId,

    /// Line name
    #[arg(long)]
    pub name: String,

    /// `work` or `material`
    #[arg(long = "type")]
    pub kind: ExpenditureType,

    /// Quantity, up to 8 decimal places
    #[arg(long)]
    pub count: Decimal,

    /// Unit price, up to 2 decimal places
    #[arg(long)]
    pub price: Decimal,
}

/// Execute expenditure command
pub async fn execute(db: &DatabaseConnection, args: ExpenditureArgs) -> anyhow::Result<()> {
    let repo = ExpenditureRepository::new(db.clone());

    match args.command {
        ExpenditureCommand::Add(add) => {
            let created = repo
                .create(CreateExpenditureInput {
                    section_id: add.section,
                    name: add.name,
                    kind: add.kind,
                    count: add.count,
                    price: add.price,
                })
                .await
                .map_err(AppError::from)?;
            print_json(&created)
        }
        ExpenditureCommand::List { section } => {
            let lines = repo
                .list_by_section(section)
                .await
                .map_err(AppError::from)?;
            print_json(&lines)
        }
        ExpenditureCommand::Rm { id } => {
            repo.delete(id).await.map_err(AppError::from)?;
            println!("Deleted expenditure {id}");
            Ok(())
        }
    }
}
