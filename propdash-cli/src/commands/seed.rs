//! Seed command: load the demo data set into an empty store

use anyhow::{Context, Result};
use propdash_core::PropdashConfig;
use propdash_server::SeedOutcome;

use super::{open_database, DatabaseArgs};

pub async fn run_seed(args: DatabaseArgs, mut config: PropdashConfig) -> Result<()> {
    args.apply(&mut config);
    let db = open_database(&config).await?;

    let outcome = db.seed_if_empty().await.context("seeding failed")?;
    db.close().await;

    match outcome {
        SeedOutcome::Seeded {
            properties,
            tenants,
            leases,
            payments,
        } => println!(
            "Seeded {} properties, {} tenants, {} leases, {} payments",
            properties, tenants, leases, payments
        ),
        SeedOutcome::Skipped {
            existing_properties,
        } => println!(
            "Store already has {} properties; nothing seeded",
            existing_properties
        ),
    }
    Ok(())
}
