use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use xrate::core::DateKey;
use xrate::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration (at --config-path when given)
    Setup,
    /// Show the rate of a currency against the provider's reference currency
    Rate {
        currency: String,
        /// Date as YYYY-MM-DD, defaults to today
        date: Option<DateKey>,
    },
    /// Show the cross-rate between two currencies
    Cross {
        from: String,
        to: String,
        /// Date as YYYY-MM-DD, defaults to today
        date: Option<DateKey>,
    },
    /// Show every rate published for a day
    Table {
        /// Date as YYYY-MM-DD, defaults to today
        date: Option<DateKey>,
    },
}

impl From<Commands> for xrate::AppCommand {
    fn from(cmd: Commands) -> xrate::AppCommand {
        match cmd {
            Commands::Rate { currency, date } => xrate::AppCommand::Rate {
                currency,
                date: date.unwrap_or_else(DateKey::today),
            },
            Commands::Cross { from, to, date } => xrate::AppCommand::Cross {
                from,
                to,
                date: date.unwrap_or_else(DateKey::today),
            },
            Commands::Table { date } => xrate::AppCommand::Table {
                date: date.unwrap_or_else(DateKey::today),
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => xrate::cli::setup::setup_at_path(path),
            None => xrate::cli::setup::setup(),
        },
        Some(cmd) => xrate::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
