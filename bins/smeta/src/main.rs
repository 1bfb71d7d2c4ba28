//! Smeta CLI
//!
//! Command-line front end for construction estimates.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use smeta_db::connect_with;
use smeta_shared::{AppConfig, AppError, config::LoggingConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "smeta")]
#[command(about = "Smeta - construction estimate budgets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Work and material totals for every building
    Buildings,
    /// Root sections of a building with their budgets
    Sections(commands::report::SectionsArgs),
    /// Reduce the prices of a section's expenditures by a percentage
    Discount(commands::report::DiscountArgs),
    /// Building management
    Building(commands::building::BuildingArgs),
    /// Section management
    Section(commands::section::SectionArgs),
    /// Expenditure management
    Expenditure(commands::expenditure::ExpenditureArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;
    init_tracing(&config.logging);

    let db = connect_with(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Connected to database");

    match cli.command {
        Commands::Buildings => commands::report::buildings(&db).await,
        Commands::Sections(args) => commands::report::sections(&db, args).await,
        Commands::Discount(args) => commands::report::discount(&db, args).await,
        Commands::Building(args) => commands::building::execute(&db, args).await,
        Commands::Section(args) => commands::section::execute(&db, args).await,
        Commands::Expenditure(args) => commands::expenditure::execute(&db, args).await,
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
