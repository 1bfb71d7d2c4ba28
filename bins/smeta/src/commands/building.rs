//! Building management commands
//!
//! Usage: smeta building <add|list|rename|rm>

use clap::{Args, Subcommand};
use sea_orm::DatabaseConnection;
use smeta_db::BuildingRepository;
use smeta_shared::{AppError, BuildingId};

use super::print_json;

/// Arguments for `smeta building`.
#[derive(Debug, Args)]
pub struct BuildingArgs {
    #[command(subcommand)]
    pub command: BuildingCommand,
}

/// Building subcommands.
#[derive(Debug, Subcommand)]
pub enum BuildingCommand {
    /// Create a building
    Add {
        /// Display name
        name: String,
    },
    /// List buildings
    List,
    /// Rename a building
    Rename {
        /// Building ID
        id: BuildingId,
        /// New display name
        name: String,
    },
    /// Delete a building that owns no sections
    Rm {
        /// Building ID
        id: BuildingId,
    },
}

/// Execute building command
pub async fn execute(db: &DatabaseConnection, args: BuildingArgs) -> anyhow::Result<()> {
    let repo = BuildingRepository::new(db.clone());

    match args.command {
        BuildingCommand::Add { name } => {
            let created = repo.create(&name).await.map_err(AppError::from)?;
            print_json(&created)
        }
        BuildingCommand::List => {
            let all = repo.list().await.map_err(AppError::from)?;
            print_json(&all)
        }
        BuildingCommand::Rename { id, name } => {
            let updated = repo.rename(id, &name).await.map_err(AppError::from)?;
            print_json(&updated)
        }
        BuildingCommand::Rm { id } => {
            repo.delete(id).await.map_err(AppError::from)?;
            println!("Deleted building {id}");
            Ok(())
        }
    }
}
