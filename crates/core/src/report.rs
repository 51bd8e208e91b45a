#![allow(clippy::format_push_string)]
#![allow(clippy::uninlined_format_args)]

use crate::participant::CalculationResult;

const RULE_HEAVY: &str = "═══════════════════════════════════════════════════════════════\n";
const RULE_LIGHT: &str = "───────────────────────────────────────────────────────────────\n";

pub struct ReportFormatter;

impl ReportFormatter {
    #[must_use]
    pub fn format(event_name: &str, coefficient: f64, result: &CalculationResult) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(RULE_HEAVY);
        output.push_str(&format!("  {}\n", event_name));
        output.push_str(&format!("  Coefficient: {} per chip\n", coefficient));
        output.push_str(RULE_HEAVY);
        output.push('\n');

        if result.has_fraction_adjustment {
            output.push_str("⚠️  Fraction adjustment applied to the largest loser\n\n");
        }

        output.push_str("Results\n");
        output.push_str(RULE_LIGHT);
        output.push_str(&format!(
            "{:<16} {:>10} {:>10} {:>12} {:>10} {:>12}\n",
            "Name", "Buy", "Final", "Chip P&L", "Venue", "Settle"
        ));
        for r in &result.results {
            output.push_str(&format!(
                "{:<16} {:>10} {:>10} {:>12} {:>10} {:>12}\n",
                r.name,
                r.buy_chips,
                r.final_chips,
                signed_f64(r.chip_pnl.round()),
                r.venue,
                signed(r.final_pnl),
            ));
        }
        output.push('\n');

        output.push_str("Settlements\n");
        output.push_str(RULE_LIGHT);
        if result.settlements.is_empty() {
            output.push_str("No settlement required\n");
        } else {
            for s in &result.settlements {
                output.push_str(&format!("{} → {}: {}\n", s.from, s.to, s.amount));
            }
        }

        output.push('\n');
        output.push_str(RULE_HEAVY);

        output
    }
}

fn signed(value: i64) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

fn signed_f64(value: f64) -> String {
    // -0.0 after rounding a small loss still reads as zero
    if value >= 0.0 {
        format!("+{}", value.abs())
    } else {
        value.to_string()
    }
}
