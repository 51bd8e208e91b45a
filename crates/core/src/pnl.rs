//! Profit/loss calculation.
//!
//! Converts chip figures into money, splits the venue fee evenly across the
//! table, and rounds every participant to whole units while keeping the
//! session total at exactly zero.

use crate::participant::{ParticipantInput, ParticipantResult};
use tracing::debug;

/// Output of [`compute`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PnlOutcome {
    pub results: Vec<ParticipantResult>,
    pub has_fraction_adjustment: bool,
}

/// Computes chip and final profit/loss for every participant.
///
/// The venue fee is shared evenly: each participant is credited what they
/// paid and debited the average. Final figures are rounded half away from
/// zero; if the rounded figures do not sum to zero, the whole residual is
/// taken from the participant with the lowest unrounded result (first in
/// input order on ties).
///
/// The coefficient is not validated here.
///
/// # Examples
/// ```
/// use chip_settle_core::participant::ParticipantInput;
/// use chip_settle_core::pnl::compute;
///
/// let outcome = compute(
///     &[
///         ParticipantInput::new("1", "P1", 10.0, 20.0, 0.0),
///         ParticipantInput::new("2", "P2", 10.0, 0.0, 0.0),
///     ],
///     5.0,
/// );
/// assert_eq!(outcome.results[0].final_pnl, 50);
/// assert_eq!(outcome.results[1].final_pnl, -50);
/// assert!(!outcome.has_fraction_adjustment);
/// ```
#[must_use]
pub fn compute(participants: &[ParticipantInput], coefficient: f64) -> PnlOutcome {
    let n = participants.len();
    if n == 0 {
        return PnlOutcome::default();
    }

    let total_venue: f64 = participants.iter().map(|p| p.venue_fee).sum();
    #[allow(clippy::cast_precision_loss)]
    let avg_venue = total_venue / n as f64;

    let chip_pnls: Vec<f64> = participants
        .iter()
        .map(|p| (p.final_chips - p.buy_chips) * coefficient)
        .collect();
    let raw_finals: Vec<f64> = participants
        .iter()
        .zip(&chip_pnls)
        .map(|(p, chip_pnl)| chip_pnl + (p.venue_fee - avg_venue))
        .collect();

    let limit = per_participant_limit(n);
    let mut rounded: Vec<i64> = raw_finals
        .iter()
        .map(|raw| round_clamped(*raw, limit))
        .collect();
    // Each |value| <= i64::MAX / n, so neither the sum nor the correction can overflow
    let residual: i64 = rounded.iter().sum();

    let has_fraction_adjustment = residual != 0;
    if has_fraction_adjustment {
        let worst = worst_index(&raw_finals);
        rounded[worst] = rounded[worst].saturating_sub(residual);
        debug!(
            participant = %participants[worst].name,
            index = worst,
            residual,
            "Applied fraction adjustment"
        );
    }

    let results = participants
        .iter()
        .zip(chip_pnls)
        .zip(rounded)
        .map(|((p, chip_pnl), final_pnl)| ParticipantResult {
            id: p.id.clone(),
            name: p.name.clone(),
            buy_chips: p.buy_chips,
            final_chips: p.final_chips,
            venue: p.venue_fee,
            chip_pnl,
            final_pnl,
        })
        .collect();

    PnlOutcome {
        results,
        has_fraction_adjustment,
    }
}

/// Largest magnitude any single rounded result may take in a session of `n`.
fn per_participant_limit(n: usize) -> i64 {
    i64::try_from(n).map_or(1, |n| i64::MAX / n.max(1))
}

/// Rounds half away from zero, saturating into `[-limit, limit]`.
#[allow(clippy::cast_possible_truncation)]
fn round_clamped(raw: f64, limit: i64) -> i64 {
    (raw.round() as i64).clamp(-limit, limit)
}

/// Index of the smallest value, earliest index winning ties.
fn worst_index(values: &[f64]) -> usize {
    let mut worst = 0;
    for (i, value) in values.iter().enumerate().skip(1) {
        if *value < values[worst] {
            worst = i;
        }
    }
    worst
}
