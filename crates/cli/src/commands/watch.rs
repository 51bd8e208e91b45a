//! Watch command: recompute on every change to the session file.

use super::output::{render, resolve_format};
use anyhow::{Context, Result};
use chip_settle_core::{check_readiness, AppConfig, OutputFormat, SessionSnapshot, SessionWatcher};
use clap::Args;

/// Arguments for the watch command.
#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// Session snapshot JSON file
    #[arg(short, long, env = "CHIP_SETTLE_SESSION")]
    pub session: String,

    /// Output format: text or json (defaults to config)
    #[arg(short, long)]
    pub format: Option<String>,
}

fn print_snapshot(snapshot: &SessionSnapshot, format: OutputFormat) -> Result<()> {
    let readiness = check_readiness(&snapshot.participants);
    if !readiness.ready {
        println!("Waiting for input:");
        for reason in &readiness.reasons {
            println!("  - {reason}");
        }
        return Ok(());
    }

    let result = snapshot.calculate();
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

/// Runs the watch command until Ctrl+C.
///
/// # Errors
/// Returns an error if the initial snapshot cannot be loaded or watching fails.
pub async fn run_watch(args: WatchArgs, config: &AppConfig) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let initial = SessionSnapshot::load(&args.session)
        .with_context(|| format!("Failed to load session: {}", args.session))?;
    print_snapshot(&initial, format)?;

    let (watcher, mut rx) = SessionWatcher::new(&args.session, initial);
    let handle = tokio::spawn(async move { watcher.watch().await });

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = rx.borrow_and_update().clone();
                tracing::info!("Session file changed, recalculating");
                print_snapshot(&snapshot, format)?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl+C, stopping watcher");
                break;
            }
        }
    }

    drop(rx);
    handle.await??;
    Ok(())
}
