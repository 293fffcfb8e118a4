//! Command implementations for the propdash CLI

pub mod seed;
pub mod serve;
pub mod stats;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use propdash_core::PropdashConfig;
use propdash_server::Database;

pub use seed::run_seed;
pub use serve::run_serve;
pub use stats::run_stats;

/// Arguments shared by commands that only touch the store
#[derive(Parser, Debug, Default)]
pub struct DatabaseArgs {
    /// SQLite file (overrides config and PROPDASH_DB_PATH)
    #[arg(long, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

impl DatabaseArgs {
    pub fn apply(&self, config: &mut PropdashConfig) {
        if let Some(path) = &self.db_path {
            config.database.path = path.clone();
        }
    }
}

/// Open the configured store, with a readable error on failure.
pub(crate) async fn open_database(config: &PropdashConfig) -> Result<Database> {
    Database::open(&config.database).await.with_context(|| {
        format!(
            "failed to open database at {}",
            config.database.path.display()
        )
    })
}
