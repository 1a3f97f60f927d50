pub mod cli;
pub mod config;
pub mod core;
pub mod providers;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::DateKey;
use crate::providers::RateClient;

/// Lookups the command line can run against the configured rate service.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Rate { currency: String, date: DateKey },
    Cross { from: String, to: String, date: DateKey },
    Table { date: DateKey },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("xrate starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let client = RateClient::from_config(&config).context("Cannot create rate client")?;

    let output = match command {
        AppCommand::Rate { currency, date } => cli::rates::rate(&client, &currency, date)?,
        AppCommand::Cross { from, to, date } => cli::rates::cross_rate(&client, &from, &to, date)?,
        AppCommand::Table { date } => cli::rates::rate_table(&client, date)?,
    };
    println!("{output}");
    Ok(())
}
