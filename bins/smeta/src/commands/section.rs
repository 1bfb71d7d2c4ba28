//! Section management commands
//!
//! Usage: smeta section <add|list|move|rm>

use clap::{Args, Subcommand};
use sea_orm::DatabaseConnection;
use smeta_db::{
    SectionRepository,
    repositories::{CreateSectionInput, UpdateSectionInput},
};
use smeta_shared::{AppError, BuildingId, SectionId};

use super::print_json;

/// Arguments for `smeta section`.
#[derive(Debug, Args)]
pub struct SectionArgs {
    #[command(subcommand)]
    pub command: SectionCommand,
}

/// Section subcommands.
#[derive(Debug, Subcommand)]
pub enum SectionCommand {
    /// Create a root section, or a child with --parent
    Add {
        /// Owning building
        #[arg(long)]
        building: BuildingId,
        /// Parent section; must itself be a root
        #[arg(long)]
        parent: Option<SectionId>,
    },
    /// List every section of a building
    List {
        /// Building ID
        #[arg(long)]
        building: BuildingId,
    },
    /// Move a section to another building or parent
    Move(MoveArgs),
    /// Delete a section with no children and no expenditures
    Rm {
        /// Section ID
        id: SectionId,
    },
}

/// Arguments for `smeta section move`.
#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Section ID
    pub id: SectionId,

    /// New owning building
    #[arg(long)]
    pub building: Option<BuildingId>,

    /// New parent section
    #[arg(long, conflicts_with = "root")]
    pub parent: Option<SectionId>,

    /// Detach the section into a root
    #[arg(long)]
    pub root: bool,
}

impl From<&MoveArgs> for UpdateSectionInput {
    fn from(args: &MoveArgs) -> Self {
        let parent_id = if args.root {
            Some(None)
        } else {
            args.parent.map(Some)
        };
        Self {
            building_id: args.building,
            parent_id,
        }
    }
}

/// Execute section command
pub async fn execute(db: &DatabaseConnection, args: SectionArgs) -> anyhow::Result<()> {
    let repo = SectionRepository::new(db.clone());

    match args.command {
        SectionCommand::Add { building, parent } => {
            let created = repo
                .create(CreateSectionInput {
                    building_id: building,
                    parent_id: parent,
                })
                .await
                .map_err(AppError::from)?;
            print_json(&created)
        }
        SectionCommand::List { building } => {
            let all = repo
                .list_by_building(building)
                .await
                .map_err(AppError::from)?;
            print_json(&all)
        }
        SectionCommand::Move(move_args) => {
            let updated = repo
                .update(move_args.id, (&move_args).into())
                .await
                .map_err(AppError::from)?;
            print_json(&updated)
        }
        SectionCommand::Rm { id } => {
            repo.delete(id).await.map_err(AppError::from)?;
            println!("Deleted section {id}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn move_args(parent: Option<SectionId>, root: bool) -> MoveArgs {
        MoveArgs {
            id: SectionId::new(),
            building: None,
            parent,
            root,
        }
    }

    #[test]
    fn test_move_to_root() {
        let input = UpdateSectionInput::from(&move_args(None, true));
        assert_eq!(input.parent_id, Some(None));
    }

    #[test]
    fn test_move_under_parent() {
        let parent = SectionId::new();
        let input = UpdateSectionInput::from(&move_args(Some(parent), false));
        assert_eq!(input.parent_id, Some(Some(parent)));
    }

    #[test]
    fn test_move_keeps_parent_when_unset() {
        let input = UpdateSectionInput::from(&move_args(None, false));
        assert_eq!(input.parent_id, None);
        assert_eq!(input.building_id, None);
    }
}
