//! rankctl - inspect a rank configuration
//!
//! Loads a YAML rank configuration, builds the registry and answers permission
//! queries against it.

use clap::{Parser, Subcommand};
use rank_manager::utils::LogLevel;
use rank_manager::{Config, RankManager};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "rankctl", version, about = "Inspect rank hierarchies")]
struct Cli {
    /// Path to the rank configuration file
    #[arg(short, long, env = "RANK_MANAGER_CONFIG", default_value = "config/ranks.yaml")]
    config: PathBuf,

    /// Override the configured log level
    #[arg(long)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every rank with its effective permissions as JSON
    List,
    /// Check whether a rank holds a permission
    Check { rank_id: i32, permission: String },
    /// Check whether a player holds a permission
    Player { name: String, permission: String },
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = Config::from_file(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    rank_manager::utils::init_logging(&config.logging)?;
    info!(
        "Loaded {} ranks from {:?} (log level {})",
        config.ranks.len(),
        cli.config,
        config.logging.level
    );

    let manager = RankManager::from_config(&config)?;

    match cli.command {
        Command::List => {
            let snapshots: Vec<_> = manager.ranks().iter().map(|r| r.snapshot()).collect();
            println!("{}", serde_json::to_string_pretty(&snapshots)?);
            Ok(true)
        }
        Command::Check {
            rank_id,
            permission,
        } => {
            let rank = manager
                .rank_by_id(rank_id)
                .ok_or_else(|| anyhow::anyhow!("Rank with id {} does not exist", rank_id))?;
            let granted = rank.has_permission(&permission);
            println!("{} {}: {}", rank.name(), permission, granted);
            Ok(granted)
        }
        Command::Player { name, permission } => {
            let granted = manager.player_has_permission(&name, &permission);
            println!("{} {}: {}", name, permission, granted);
            Ok(granted)
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
