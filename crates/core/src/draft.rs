//! Local draft adapter.
//!
//! Draft events are edited as free text, so every numeric field is a raw
//! string resolved through [`parse_lenient`].

use crate::engine;
use crate::numeric::parse_lenient;
use crate::participant::{CalculationResult, ParticipantInput};
use serde::{Deserialize, Serialize};

/// Participant row as typed into a draft.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DraftParticipant {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub buy_chips: String,
    #[serde(default)]
    pub final_chips: String,
    #[serde(default)]
    pub venue: String,
}

impl DraftParticipant {
    /// True if either chip field has any text in it.
    #[must_use]
    pub fn has_chip_input(&self) -> bool {
        !self.buy_chips.is_empty() || !self.final_chips.is_empty()
    }
}

impl From<&DraftParticipant> for ParticipantInput {
    fn from(p: &DraftParticipant) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            buy_chips: parse_lenient(&p.buy_chips),
            final_chips: parse_lenient(&p.final_chips),
            venue_fee: parse_lenient(&p.venue),
        }
    }
}

/// A locally edited event that has not been shared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DraftEvent {
    pub event_name: String,
    /// Raw coefficient text
    pub coefficient: String,
    pub participants: Vec<DraftParticipant>,
}

impl DraftEvent {
    #[must_use]
    pub fn coefficient_value(&self) -> f64 {
        parse_lenient(&self.coefficient)
    }

    /// Sums of the leniently parsed buy-in and final chip fields.
    #[must_use]
    pub fn chip_totals(&self) -> (f64, f64) {
        self.participants.iter().fold((0.0, 0.0), |(buy, fin), p| {
            (buy + parse_lenient(&p.buy_chips), fin + parse_lenient(&p.final_chips))
        })
    }

    #[must_use]
    pub fn inputs(&self) -> Vec<ParticipantInput> {
        self.participants.iter().map(ParticipantInput::from).collect()
    }

    /// Runs the engine with the parsed coefficient.
    #[must_use]
    pub fn calculate(&self) -> CalculationResult {
        engine::calculate(&self.inputs(), self.coefficient_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, buy: &str, fin: &str, venue: &str) -> DraftParticipant {
        DraftParticipant {
            id: name.to_lowercase(),
            name: name.to_string(),
            buy_chips: buy.to_string(),
            final_chips: fin.to_string(),
            venue: venue.to_string(),
        }
    }

    #[test]
    fn test_blank_fields_resolve_to_zero() {
        let input = ParticipantInput::from(&row("Ann", "", "abc", " "));
        assert_eq!(input.buy_chips, 0.0);
        assert_eq!(input.final_chips, 0.0);
        assert_eq!(input.venue_fee, 0.0);
    }

    #[test]
    fn test_chip_totals_and_input_flag() {
        let event = DraftEvent {
            event_name: "Draft".to_string(),
            coefficient: "5".to_string(),
            participants: vec![row("A", "100", "150", ""), row("B", "100", "x", "")],
        };

        assert_eq!(event.chip_totals(), (200.0, 150.0));
        assert!(event.participants[0].has_chip_input());
        assert!(!row("C", "", "", "500").has_chip_input());
    }

    #[test]
    fn test_calculate_matches_stored_mode() {
        let event = DraftEvent {
            event_name: "Draft".to_string(),
            coefficient: "5".to_string(),
            participants: vec![row("P1", "10", "20", ""), row("P2", "10", "0", "")],
        };

        let result = event.calculate();
        let finals: Vec<i64> = result.results.iter().map(|r| r.final_pnl).collect();
        assert_eq!(finals, vec![50, -50]);
        assert_eq!(result.settlements[0].from, "P2");
    }

    #[test]
    fn test_unparseable_coefficient_is_zero() {
        let event = DraftEvent {
            coefficient: "five".to_string(),
            ..DraftEvent::default()
        };
        assert_eq!(event.coefficient_value(), 0.0);
    }
}
