//! propdash CLI - property management dashboard backend
//!
//! Entry point for the `propdash` command-line tool:
//! - `serve`: run the REST API (and optionally the dashboard bundle)
//! - `seed`: load the demo data set into an empty store
//! - `stats`: print the dashboard figures as JSON
//! - `config`: inspect the effective configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use propdash_core::PropdashConfig;

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "propdash",
    author,
    version,
    about = "Property management dashboard backend",
    long_about = "Track properties, tenants, leases, rent payments and maintenance requests \
                  in a single SQLite file, served over a small REST API."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    /// Config file (default: ~/.propdash/config.toml)
    #[arg(long, global = true, env = "PROPDASH_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Insert the demo data set if the store has no properties
    Seed(commands::DatabaseArgs),
    /// Print dashboard stats as JSON
    Stats(commands::DatabaseArgs),
    /// Inspect propdash configuration
    Config(config::ConfigArgs),
}

fn load_config(path: Option<&PathBuf>) -> Result<PropdashConfig> {
    let config = match path {
        Some(path) => PropdashConfig::load_from(path),
        None => PropdashConfig::load(),
    };
    config.context("failed to load configuration")
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    let config_path = cli.config.clone();
    let cfg = load_config(config_path.as_ref())?;

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args, cfg).await,
        Commands::Seed(args) => commands::run_seed(args, cfg).await,
        Commands::Stats(args) => commands::run_stats(args, cfg).await,
        Commands::Config(args) => config::run_config(args, &cfg, config_path.as_deref()),
    };

    tracing_setup::shutdown_otel();
    result
}
