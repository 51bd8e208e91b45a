//! Shared-session commands: `calculate` and `check`.

use super::output::{render, resolve_format};
use anyhow::{Context, Result};
use chip_settle_core::{check_readiness, AppConfig, SessionSnapshot};
use clap::Args;

/// Arguments for the calculate command.
#[derive(Args, Debug, Clone)]
pub struct CalculateArgs {
    /// Session snapshot JSON file
    #[arg(short, long, env = "CHIP_SETTLE_SESSION")]
    pub session: String,

    /// Output format: text or json (defaults to config)
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the check command.
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Session snapshot JSON file
    #[arg(short, long, env = "CHIP_SETTLE_SESSION")]
    pub session: String,
}

/// Loads a snapshot, applies the readiness gate, and prints the settlement.
///
/// # Errors
/// Returns an error if the snapshot cannot be loaded or the session is not ready.
pub fn run_calculate(args: CalculateArgs, config: &AppConfig) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let snapshot = SessionSnapshot::load(&args.session)
        .with_context(|| format!("Failed to load session: {}", args.session))?;

    let readiness = check_readiness(&snapshot.participants);
    if !readiness.ready {
        for reason in &readiness.reasons {
            tracing::warn!("{}", reason);
        }
        anyhow::bail!(
            "Session '{}' is not ready: {}",
            snapshot.session.event_name,
            readiness.reasons.join("; ")
        );
    }

    let result = snapshot.calculate();
    tracing::info!(
        participants = result.results.len(),
        settlements = result.settlements.len(),
        "Session calculated"
    );

    println!(
        "{}",
        render(
            format,
            &snapshot.session.event_name,
            snapshot.session.coefficient,
            &result
        )?
    );
    Ok(())
}

/// Prints per-participant entry status and the readiness verdict.
///
/// # Errors
/// Returns an error if the snapshot cannot be loaded or the session is not ready.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let snapshot = SessionSnapshot::load(&args.session)
        .with_context(|| format!("Failed to load session: {}", args.session))?;

    println!("{}", snapshot.session.event_name);
    println!("{}", "-".repeat(40));
    for p in &snapshot.participants {
        let status = if p.is_entered() { "entered" } else { "pending" };
        println!("  {:<24} {}", p.name, status);
    }
    println!();

    let readiness = check_readiness(&snapshot.participants);
    if readiness.ready {
        println!("Ready to calculate");
        return Ok(());
    }

    for reason in &readiness.reasons {
        println!("  - {reason}");
    }
    anyhow::bail!("Session is not ready ({} issue(s))", readiness.reasons.len())
}
