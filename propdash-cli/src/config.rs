//! `propdash config` subcommands: locate and print the effective configuration

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use propdash_core::PropdashConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective configuration (file + environment) as TOML
    Show,
}

pub fn run_config(args: ConfigArgs, config: &PropdashConfig, path: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommands::Path => run_path(path),
        ConfigCommands::Show => run_show(config),
    }
}

fn run_path(path: Option<&Path>) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(PropdashConfig::config_path);
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; defaults are in effect)");
    }
    Ok(())
}

fn run_show(config: &PropdashConfig) -> Result<()> {
    let rendered = config.to_toml().context("failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}
