//! Local draft command.
//!
//! Reads participant rows from CSV with the header
//! `name,buy_chips,final_chips,venue` (an `id` column is optional).
//! Any field may be blank.

use super::output::{render, resolve_format};
use anyhow::{Context, Result};
use chip_settle_core::{check_draft, check_setup, AppConfig, DraftEvent, DraftParticipant};
use clap::Args;
use std::fs::File;
use std::io::Read;

/// Arguments for the draft command.
#[derive(Args, Debug, Clone)]
pub struct DraftArgs {
    /// Participant CSV file
    #[arg(short, long)]
    pub participants: String,

    /// Cash per chip (defaults to config)
    #[arg(short, long)]
    pub coefficient: Option<String>,

    /// Event name (defaults to today's date)
    #[arg(short, long)]
    pub event_name: Option<String>,

    /// Output format: text or json (defaults to config)
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Today's date as `YYYY/MM/DD`, used as the default event name.
fn today_label() -> String {
    chrono::Local::now().format("%Y/%m/%d").to_string()
}

/// Reads draft rows, assigning a fresh id to rows without one.
///
/// # Errors
/// Returns an error if the CSV is malformed.
pub fn read_draft_rows<R: Read>(reader: R) -> Result<Vec<DraftParticipant>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<DraftParticipant>() {
        let mut row = record?;
        if row.id.is_empty() {
            row.id = uuid::Uuid::new_v4().to_string();
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Runs the draft command.
///
/// # Errors
/// Returns an error if the CSV cannot be read or the draft fails its checks.
pub fn run_draft(args: DraftArgs, config: &AppConfig) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let file = File::open(&args.participants)
        .with_context(|| format!("Failed to open CSV file: {}", args.participants))?;
    let participants = read_draft_rows(file)
        .with_context(|| format!("Failed to parse CSV file: {}", args.participants))?;
    tracing::info!(
        "Loaded {} draft participants from {}",
        participants.len(),
        args.participants
    );

    let event = DraftEvent {
        event_name: args.event_name.unwrap_or_else(today_label),
        coefficient: args
            .coefficient
            .unwrap_or_else(|| config.defaults.coefficient.to_string()),
        participants,
    };

    let mut reasons = check_setup(&event.event_name, &event.coefficient).reasons;
    reasons.extend(check_draft(&event).reasons);
    if !reasons.is_empty() {
        anyhow::bail!("Draft is not ready: {}", reasons.join("; "));
    }

    let result = event.calculate();
    println!(
        "{}",
        render(format, &event.event_name, event.coefficient_value(), &result)?
    );
    Ok(())
}
