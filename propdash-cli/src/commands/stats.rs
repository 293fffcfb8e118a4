//! Stats command: print the dashboard figures without starting the server

use anyhow::{Context, Result};
use propdash_core::PropdashConfig;

use super::{open_database, DatabaseArgs};

pub async fn run_stats(args: DatabaseArgs, mut config: PropdashConfig) -> Result<()> {
    args.apply(&mut config);
    let db = open_database(&config).await?;

    let stats = db.stats().dashboard().await.context("failed to compute stats")?;
    db.close().await;

    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
