//! Settlement minimization.
//!
//! Turns signed per-participant balances into a short list of direct
//! payments using greedy two-pointer matching over the sorted balances.

use crate::participant::Settlement;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Net position of one participant. Positive is owed money, negative owes money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub name: String,
    pub amount: i64,
}

impl Balance {
    #[must_use]
    pub fn new(name: impl Into<String>, amount: i64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Sum of all balances, widened so extreme amounts cannot overflow.
/// Zero for any well-formed session.
#[must_use]
pub fn imbalance(balances: &[Balance]) -> i128 {
    balances.iter().map(|b| i128::from(b.amount)).sum()
}

/// Produces directed payments that discharge `balances`.
///
/// Balances are sorted ascending (stable), then the largest remaining debtor
/// pays the largest remaining creditor until the cursors meet. Settlements
/// come out in that pairing order. At most `n - 1` payments are emitted.
///
/// Input is expected to sum to zero. If it does not, a warning is logged and
/// the loop still terminates, leaving the surplus undischarged.
///
/// # Examples
/// ```
/// use chip_settle_core::settlement::{minimize, Balance};
///
/// let settlements = minimize(&[Balance::new("P1", 50), Balance::new("P2", -50)]);
/// assert_eq!(settlements.len(), 1);
/// assert_eq!(settlements[0].from, "P2");
/// assert_eq!(settlements[0].to, "P1");
/// assert_eq!(settlements[0].amount, 50);
/// ```
#[must_use]
pub fn minimize(balances: &[Balance]) -> Vec<Settlement> {
    let residual = imbalance(balances);
    if residual != 0 {
        warn!(residual, "Settlement input does not sum to zero");
    }

    let mut working = balances.to_vec();
    working.sort_by_key(|b| b.amount);

    let mut settlements = Vec::new();
    if working.len() < 2 {
        return settlements;
    }

    let mut left = 0;
    let mut right = working.len() - 1;

    while left < right {
        let transfer = working[left]
            .amount
            .saturating_neg()
            .min(working[right].amount);

        if transfer > 0 {
            settlements.push(Settlement {
                from: working[left].name.clone(),
                to: working[right].name.clone(),
                amount: transfer,
            });
        }

        working[left].amount = working[left].amount.saturating_add(transfer);
        working[right].amount = working[right].amount.saturating_sub(transfer);

        if working[left].amount >= 0 {
            left += 1;
        }
        if working[right].amount <= 0 {
            // right > left >= 0 here, so this never underflows
            right -= 1;
        }
    }

    settlements
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn settle(name_from: &str, name_to: &str, amount: i64) -> Settlement {
        Settlement {
            from: name_from.to_string(),
            to: name_to.to_string(),
            amount,
        }
    }

    /// Applies payments and returns what is left per name.
    fn remaining(balances: &[Balance], settlements: &[Settlement]) -> HashMap<String, i64> {
        let mut left: HashMap<String, i64> = HashMap::new();
        for b in balances {
            *left.entry(b.name.clone()).or_default() += b.amount;
        }
        for s in settlements {
            *left.entry(s.from.clone()).or_default() += s.amount;
            *left.entry(s.to.clone()).or_default() -= s.amount;
        }
        left
    }

    #[test]
    fn test_single_pair() {
        let settlements = minimize(&[Balance::new("P1", 50), Balance::new("P2", -50)]);
        assert_eq!(settlements, vec![settle("P2", "P1", 50)]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(minimize(&[]).is_empty());
        assert!(minimize(&[Balance::new("solo", 0)]).is_empty());
    }

    #[test]
    fn test_all_zero_balances() {
        let balances = vec![Balance::new("A", 0), Balance::new("B", 0), Balance::new("C", 0)];
        assert!(minimize(&balances).is_empty());
    }

    #[test]
    fn test_largest_debtor_pays_largest_creditor_first() {
        let balances = vec![
            Balance::new("A", -100),
            Balance::new("B", 40),
            Balance::new("C", 60),
        ];

        assert_eq!(
            minimize(&balances),
            vec![settle("A", "C", 60), settle("A", "B", 40)]
        );
    }

    #[test]
    fn test_equal_debtors_keep_input_order() {
        let balances = vec![
            Balance::new("A", -30),
            Balance::new("B", -30),
            Balance::new("C", 60),
        ];

        assert_eq!(
            minimize(&balances),
            vec![settle("A", "C", 30), settle("B", "C", 30)]
        );
    }

    #[test]
    fn test_exact_match_advances_both_cursors() {
        let balances = vec![
            Balance::new("A", -20),
            Balance::new("B", 20),
            Balance::new("C", -70),
            Balance::new("D", 70),
        ];

        // Sorted: C -70, A -20, B 20, D 70
        assert_eq!(
            minimize(&balances),
            vec![settle("C", "D", 70), settle("A", "B", 20)]
        );
    }

    #[test]
    fn test_does_not_mutate_input() {
        let balances = vec![Balance::new("A", 10), Balance::new("B", -10)];
        let before = balances.clone();
        let _ = minimize(&balances);
        assert_eq!(balances, before);
    }

    #[test]
    fn test_unbalanced_input_terminates() {
        let balances = vec![Balance::new("A", -10), Balance::new("B", 25)];
        assert_eq!(imbalance(&balances), 15);

        let settlements = minimize(&balances);
        assert_eq!(settlements, vec![settle("A", "B", 10)]);
        assert_eq!(remaining(&balances, &settlements)["B"], 15);

        let all_positive = vec![Balance::new("A", 5), Balance::new("B", 7)];
        assert!(minimize(&all_positive).is_empty());
    }

    #[test]
    fn test_extreme_balances_do_not_overflow() {
        let balances = vec![Balance::new("A", i64::MIN), Balance::new("B", i64::MAX)];
        assert_eq!(imbalance(&balances), -1);

        // i64::MIN cannot be fully discharged by i64::MAX; the leftover unit stays with A
        assert_eq!(minimize(&balances), vec![settle("A", "B", i64::MAX)]);

        let balanced = vec![
            Balance::new("A", -i64::MAX),
            Balance::new("B", i64::MAX / 2),
            Balance::new("C", i64::MAX - i64::MAX / 2),
        ];
        let settlements = minimize(&balanced);
        assert_eq!(settlements.len(), 2);
        for (_, amount) in remaining(&balanced, &settlements) {
            assert_eq!(amount, 0);
        }
    }

    fn arb_zero_sum_balances() -> impl Strategy<Value = Vec<Balance>> {
        prop::collection::vec(-10_000i64..10_000, 1..15).prop_map(|mut amounts| {
            let total: i64 = amounts.iter().sum();
            amounts.push(-total);
            amounts
                .into_iter()
                .enumerate()
                .map(|(i, amount)| Balance::new(format!("p{i}"), amount))
                .collect()
        })
    }

    proptest! {
        /// Applying every payment drives every balance to zero.
        #[test]
        fn prop_settlements_discharge_balances(balances in arb_zero_sum_balances()) {
            let settlements = minimize(&balances);
            for (name, amount) in remaining(&balances, &settlements) {
                prop_assert_eq!(amount, 0, "{} left with {}", name, amount);
            }
        }

        /// No more than n - 1 payments, each strictly positive.
        #[test]
        fn prop_settlement_bound(balances in arb_zero_sum_balances()) {
            let settlements = minimize(&balances);
            prop_assert!(settlements.len() < balances.len());
            prop_assert!(settlements.iter().all(|s| s.amount > 0));
        }
    }
}
