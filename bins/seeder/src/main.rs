//! Database seeder for Smeta development.
//!
//! Seeds one demo building with two root sections, a few child sections and
//! priced work and material lines, then prints the resulting budgets.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use smeta_core::estimate::ExpenditureType;
use smeta_db::{
    BuildingRepository, EstimateRepository, ExpenditureRepository, SectionRepository,
    connect_with,
    repositories::{CreateExpenditureInput, CreateSectionInput},
};
use smeta_shared::{AppConfig, BuildingId, SectionId};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_BUILDING: &str = "Demo residential block";

/// `(root name, [(child name, [(line name, type, count, price)])])`
type Plan = &'static [(
    &'static str,
    &'static [(&'static str, &'static [(&'static str, ExpenditureType, Decimal, Decimal)])],
)];

const PLAN: Plan = &[
    (
        "Foundation",
        &[
            (
                "Excavation",
                &[
                    ("Excavator hire", ExpenditureType::Work, dec!(16), dec!(95.00)),
                    ("Soil removal", ExpenditureType::Work, dec!(120.5), dec!(7.40)),
                ],
            ),
            (
                "Footings",
                &[
                    ("Concrete B25", ExpenditureType::Material, dec!(42.75), dec!(118.00)),
                    ("Rebar A500", ExpenditureType::Material, dec!(3.2), dec!(910.00)),
                    ("Pouring", ExpenditureType::Work, dec!(42.75), dec!(22.50)),
                ],
            ),
        ],
    ),
    (
        "Walls",
        &[(
            "Masonry",
            &[
                ("Ceramic block", ExpenditureType::Material, dec!(5400), dec!(1.15)),
                ("Mortar", ExpenditureType::Material, dec!(18), dec!(64.00)),
                ("Bricklaying", ExpenditureType::Work, dec!(310), dec!(14.00)),
            ],
        )],
    ),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("smeta=info")),
        )
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let db = connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;

    let buildings = BuildingRepository::new(db.clone());
    let sections = SectionRepository::new(db.clone());
    let expenditures = ExpenditureRepository::new(db.clone());
    let estimate = EstimateRepository::new(db.clone());

    if buildings
        .list()
        .await?
        .iter()
        .any(|b| b.name == DEMO_BUILDING)
    {
        info!("Demo building already exists, skipping");
        return Ok(());
    }

    let building = buildings.create(DEMO_BUILDING).await?;
    let building_id = BuildingId::from_uuid(building.id);

    for (root_name, children) in PLAN {
        let root = sections
            .create(CreateSectionInput {
                building_id,
                parent_id: None,
            })
            .await?;
        info!(section_id = %root.id, name = root_name, "Seeded root section");

        for (child_name, lines) in *children {
            let child = sections
                .create(CreateSectionInput {
                    building_id,
                    parent_id: Some(SectionId::from_uuid(root.id)),
                })
                .await?;
            info!(section_id = %child.id, name = child_name, "Seeded child section");

            for (name, kind, count, price) in *lines {
                expenditures
                    .create(CreateExpenditureInput {
                        section_id: SectionId::from_uuid(child.id),
                        name: (*name).to_string(),
                        kind: *kind,
                        count: *count,
                        price: *price,
                    })
                    .await?;
            }
        }
    }

    for budget in estimate.parent_sections(building_id).await? {
        info!(
            section_id = %budget.section.id,
            budget_parent = %budget.budget_parent,
            budget_child = %budget.budget_child,
            budget_all = %budget.budget_all,
            "Root section budget"
        );
    }

    info!(building_id = %building_id, "Seeding complete");
    Ok(())
}
