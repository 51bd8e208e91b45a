//! Pre-calculation gates.
//!
//! The engine accepts any input; these checks decide whether results are
//! worth showing yet and explain why not.

use crate::draft::DraftEvent;
use crate::numeric::{parse_lenient, resolve_optional};
use crate::session::StoredParticipant;
use serde::{Deserialize, Serialize};

/// Outcome of a readiness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readiness {
    pub ready: bool,
    pub reasons: Vec<String>,
}

impl Readiness {
    fn from_reasons(reasons: Vec<String>) -> Self {
        Self {
            ready: reasons.is_empty(),
            reasons,
        }
    }
}

fn mismatch_reason(total_buy: f64, total_final: f64) -> String {
    format!("Buy-in chips {total_buy} and final chips {total_final} do not match")
}

/// Checks a shared session before calculating.
///
/// Every participant must have entered both chip counts. Only once they all
/// have are the buy-in and final totals compared.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn check_readiness(participants: &[StoredParticipant]) -> Readiness {
    let reasons: Vec<String> = participants
        .iter()
        .filter(|p| !p.is_entered())
        .map(|p| format!("{} has not entered data", p.name))
        .collect();

    if !reasons.is_empty() {
        return Readiness::from_reasons(reasons);
    }

    let total_buy: f64 = participants.iter().map(|p| resolve_optional(p.buy_chips)).sum();
    let total_final: f64 = participants
        .iter()
        .map(|p| resolve_optional(p.final_chips))
        .sum();

    if total_buy != total_final {
        return Readiness::from_reasons(vec![mismatch_reason(total_buy, total_final)]);
    }

    Readiness::from_reasons(Vec::new())
}

/// Checks draft event settings: a non-blank name and a positive coefficient.
#[must_use]
pub fn check_setup(event_name: &str, coefficient: &str) -> Readiness {
    let mut reasons = Vec::new();
    if event_name.trim().is_empty() {
        reasons.push("Event name is required".to_string());
    }
    if parse_lenient(coefficient) <= 0.0 {
        reasons.push("Coefficient must be greater than 0".to_string());
    }
    Readiness::from_reasons(reasons)
}

/// Checks a draft event's participant rows.
///
/// Requires at least two participants, a name on every row, and, once any
/// chip figure has been typed, matching buy-in and final totals.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn check_draft(event: &DraftEvent) -> Readiness {
    let mut reasons = Vec::new();

    if event.participants.len() < 2 {
        reasons.push("At least 2 participants are required".to_string());
    }

    for (i, p) in event.participants.iter().enumerate() {
        if p.name.trim().is_empty() {
            reasons.push(format!("Participant {} has no name", i + 1));
        }
    }

    if event.participants.iter().any(|p| p.has_chip_input()) {
        let (total_buy, total_final) = event.chip_totals();
        if total_buy != total_final {
            reasons.push(mismatch_reason(total_buy, total_final));
        }
    }

    Readiness::from_reasons(reasons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftParticipant;

    fn stored(name: &str, buy: Option<f64>, fin: Option<f64>) -> StoredParticipant {
        StoredParticipant {
            id: name.to_lowercase(),
            session_id: "s".to_string(),
            name: name.to_string(),
            buy_chips: buy,
            final_chips: fin,
            venue_fee: 0.0,
            created_at: None,
        }
    }

    fn draft(name: &str, buy: &str, fin: &str) -> DraftParticipant {
        DraftParticipant {
            id: String::new(),
            name: name.to_string(),
            buy_chips: buy.to_string(),
            final_chips: fin.to_string(),
            venue: String::new(),
        }
    }

    #[test]
    fn test_ready_when_entered_and_balanced() {
        let readiness = check_readiness(&[
            stored("Alice", Some(1000.0), Some(1500.0)),
            stored("Bob", Some(1000.0), Some(500.0)),
        ]);
        assert!(readiness.ready);
        assert!(readiness.reasons.is_empty());
    }

    #[test]
    fn test_unentered_participants_listed() {
        let readiness = check_readiness(&[
            stored("Alice", Some(1000.0), None),
            stored("Bob", Some(1000.0), Some(500.0)),
            stored("Carol", None, None),
        ]);
        assert!(!readiness.ready);
        assert_eq!(
            readiness.reasons,
            vec![
                "Alice has not entered data".to_string(),
                "Carol has not entered data".to_string(),
            ]
        );
    }

    #[test]
    fn test_totals_checked_only_when_all_entered() {
        // Totals also differ here, but only the missing entry is reported
        let readiness = check_readiness(&[
            stored("Alice", Some(1000.0), Some(9000.0)),
            stored("Bob", Some(1000.0), None),
        ]);
        assert_eq!(readiness.reasons.len(), 1);

        let readiness = check_readiness(&[
            stored("Alice", Some(1000.0), Some(1200.0)),
            stored("Bob", Some(1000.0), Some(700.0)),
        ]);
        assert!(!readiness.ready);
        assert_eq!(
            readiness.reasons,
            vec!["Buy-in chips 2000 and final chips 1900 do not match".to_string()]
        );
    }

    #[test]
    fn test_empty_session_is_ready() {
        assert!(check_readiness(&[]).ready);
    }

    #[test]
    fn test_setup_rules() {
        assert!(check_setup("Friday game", "5").ready);
        assert!(check_setup("Friday game", "0.5").ready);

        let readiness = check_setup("   ", "0");
        assert_eq!(
            readiness.reasons,
            vec![
                "Event name is required".to_string(),
                "Coefficient must be greater than 0".to_string(),
            ]
        );
        assert!(!check_setup("x", "-1").ready);
        assert!(!check_setup("x", "abc").ready);
    }

    #[test]
    fn test_draft_rules() {
        let ok = DraftEvent {
            event_name: "e".to_string(),
            coefficient: "5".to_string(),
            participants: vec![draft("A", "100", "150"), draft("B", "100", "50")],
        };
        assert!(check_draft(&ok).ready);

        let lonely = DraftEvent {
            participants: vec![draft("A", "", "")],
            ..ok.clone()
        };
        assert_eq!(
            check_draft(&lonely).reasons,
            vec!["At least 2 participants are required".to_string()]
        );

        let unnamed = DraftEvent {
            participants: vec![draft("A", "", ""), draft(" ", "", "")],
            ..ok.clone()
        };
        assert_eq!(
            check_draft(&unnamed).reasons,
            vec!["Participant 2 has no name".to_string()]
        );

        let mismatched = DraftEvent {
            participants: vec![draft("A", "100", ""), draft("B", "", "")],
            ..ok
        };
        assert_eq!(
            check_draft(&mismatched).reasons,
            vec!["Buy-in chips 100 and final chips 0 do not match".to_string()]
        );
    }

    #[test]
    fn test_draft_without_chip_input_skips_totals() {
        let event = DraftEvent {
            event_name: "e".to_string(),
            coefficient: "5".to_string(),
            participants: vec![draft("A", "", ""), draft("B", "", "")],
        };
        assert!(check_draft(&event).ready);
    }
}
