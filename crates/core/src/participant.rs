use serde::{Deserialize, Serialize};

/// Normalized per-participant figures for one session.
///
/// Both the draft and stored-session adapters resolve their raw fields into
/// this type before the engine runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantInput {
    /// Stable identifier, unique within the session
    pub id: String,
    /// Display label (not required to be unique)
    pub name: String,
    /// Chips bought in
    pub buy_chips: f64,
    /// Chips held at the end of the session
    pub final_chips: f64,
    /// Cash this participant paid toward the venue
    pub venue_fee: f64,
}

impl ParticipantInput {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        buy_chips: f64,
        final_chips: f64,
        venue_fee: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            buy_chips,
            final_chips,
            venue_fee,
        }
    }
}

/// Computed outcome for one participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantResult {
    pub id: String,
    pub name: String,
    pub buy_chips: f64,
    pub final_chips: f64,
    pub venue: f64,
    /// `(final_chips - buy_chips) * coefficient`, unrounded
    pub chip_pnl: f64,
    /// Venue-adjusted, rounded result; sums to zero across the session
    pub final_pnl: i64,
}

/// A single directed payment between two participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: String,
    pub to: String,
    pub amount: i64,
}

/// Full engine output for one session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationResult {
    pub results: Vec<ParticipantResult>,
    pub settlements: Vec<Settlement>,
    /// Set when independent rounding needed a corrective adjustment
    pub has_fraction_adjustment: bool,
}
