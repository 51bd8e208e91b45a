use chip_settle_core::config_loader::DEFAULT_CONFIG_PATH;
use chip_settle_core::ConfigLoader;
use clap::{Parser, Subcommand};

mod commands;

use commands::{CalculateArgs, CheckArgs, DraftArgs, WatchArgs};

#[derive(Parser)]
#[command(name = "chip-settle")]
#[command(about = "Settle home poker sessions with as few payments as possible", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate results and settlements for a shared session snapshot
    Calculate(CalculateArgs),
    /// Show whether every participant has entered their chips
    Check(CheckArgs),
    /// Calculate a local draft event from a participant CSV
    Draft(DraftArgs),
    /// Recalculate every time the session snapshot changes
    Watch(WatchArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ConfigLoader::load_from(&cli.config)?;
    tracing::debug!(config = ?config, "Loaded configuration");

    match cli.command {
        Commands::Calculate(args) => commands::run_calculate(args, &config)?,
        Commands::Check(args) => commands::run_check(args)?,
        Commands::Draft(args) => commands::run_draft(args, &config)?,
        Commands::Watch(args) => commands::run_watch(args, &config).await?,
    }

    Ok(())
}
