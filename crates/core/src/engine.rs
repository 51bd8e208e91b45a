use crate::participant::{CalculationResult, ParticipantInput};
use crate::pnl;
use crate::settlement::{self, Balance};
use tracing::debug;

/// Runs the full settlement pipeline for one session snapshot.
///
/// Pure: every call recomputes from `participants` alone.
#[must_use]
pub fn calculate(participants: &[ParticipantInput], coefficient: f64) -> CalculationResult {
    let outcome = pnl::compute(participants, coefficient);

    let balances: Vec<Balance> = outcome
        .results
        .iter()
        .map(|r| Balance::new(r.name.clone(), r.final_pnl))
        .collect();
    let settlements = settlement::minimize(&balances);

    debug!(
        participants = participants.len(),
        settlements = settlements.len(),
        fraction_adjusted = outcome.has_fraction_adjustment,
        "Calculated session"
    );

    CalculationResult {
        results: outcome.results,
        settlements,
        has_fraction_adjustment: outcome.has_fraction_adjustment,
    }
}
