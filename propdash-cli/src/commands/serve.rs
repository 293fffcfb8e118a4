//! HTTP server command
//!
//! Opens the store, seeds it when empty (unless disabled), and serves the API
//! until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use propdash_core::PropdashConfig;
use propdash_server::{run_server, ServerConfig};

use super::open_database;

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3001)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// SQLite file (overrides config and PROPDASH_DB_PATH)
    #[arg(long, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Built dashboard directory served for non-API paths
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Skip loading demo data into an empty store
    #[arg(long)]
    pub no_seed: bool,
}

impl ServeArgs {
    /// Flags win over file and environment values.
    fn apply(&self, config: &mut PropdashConfig) {
        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }
        if let Some(path) = &self.db_path {
            config.database.path = path.clone();
        }
        if let Some(dir) = &self.static_dir {
            config.ui.static_dir = Some(dir.clone());
        }
        if self.cors_permissive {
            config.server.cors_permissive = true;
        }
        if self.no_seed {
            config.database.seed_on_startup = false;
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, mut config: PropdashConfig) -> Result<()> {
    args.apply(&mut config);

    tracing::info!("Starting propdash server on {}", config.server.bind);

    let db = open_database(&config).await?;

    if config.database.seed_on_startup {
        let outcome = db
            .seed_if_empty()
            .await
            .context("Failed to seed database")?;
        tracing::info!(?outcome, "seed check complete");
    }

    run_server(db, ServerConfig::from(&config))
        .await
        .context("Server error")?;

    Ok(())
}
