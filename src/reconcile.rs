//! Settlement reconciliation: folds completed settlements on top of a balance
//! map and partitions the result into the two views a participant cares
//! about, plus a greedy recommendation of payments that would settle the
//! whole map.

use crate::constants::SETTLED_EPSILON;
use crate::models::Settlement;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Balances partitioned relative to one viewer. Entries within
/// [`SETTLED_EPSILON`](crate::constants::SETTLED_EPSILON) of zero are dropped
/// as settled, and the viewer's own entry is excluded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BalanceView {
    pub owed_to_viewer: HashMap<String, i64>,
    pub viewer_owes: HashMap<String, i64>,
}

/// A recommended payment that reduces outstanding balances.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementSuggestion {
    pub from: String,
    pub to: String,
    pub amount: i64,
}

/// Applies every completed, non-archived settlement to the balance map. The
/// fold walks the full settlement set, so both directions of a participant's
/// settlements are always accounted for; there is no viewer-filtered query
/// that could miss the `to_user` half.
///
/// A completed settlement is money `from_user` handed `to_user`: it pays down
/// the sender's debt and reduces the receiver's credit by the same amount.
/// The balance sum is unchanged. Pending and cancelled settlements never
/// touch balances.
pub fn apply_settlements(balances: &mut HashMap<String, i64>, settlements: &[Settlement]) {
    for settlement in settlements
        .iter()
        .filter(|s| s.state.is_active() && s.status.is_completed())
    {
        *balances.entry(settlement.from_user.clone()).or_insert(0) += settlement.amount;
        *balances.entry(settlement.to_user.clone()).or_insert(0) -= settlement.amount;
    }
}

/// Partitions a settled balance map relative to `viewer`: positive balances
/// land in `owed_to_viewer`, negative ones (negated) in `viewer_owes`.
pub fn partition_for_viewer(balances: &HashMap<String, i64>, viewer: &str) -> BalanceView {
    let mut view = BalanceView::default();
    for (participant, &balance) in balances {
        if participant == viewer || balance.abs() <= SETTLED_EPSILON {
            continue;
        }
        if balance > 0 {
            view.owed_to_viewer.insert(participant.clone(), balance);
        } else {
            view.viewer_owes.insert(participant.clone(), -balance);
        }
    }
    view
}

/// Full reconciliation: settlements folded onto the expense balances, then
/// partitioned for the viewer.
pub fn reconcile(
    mut balances: HashMap<String, i64>,
    settlements: &[Settlement],
    viewer: &str,
) -> BalanceView {
    apply_settlements(&mut balances, settlements);
    let view = partition_for_viewer(&balances, viewer);
    debug!(
        "Reconciled balances for {}: {} owed to viewer, {} owed by viewer",
        viewer,
        view.owed_to_viewer.len(),
        view.viewer_owes.len()
    );
    view
}

/// Greedy debtor/creditor matching over a balance map. Largest positions are
/// paired first; the output is deterministic (sorted by magnitude, then id)
/// and applying the suggested payments as completed settlements drives every
/// balance within [`SETTLED_EPSILON`](crate::constants::SETTLED_EPSILON) of
/// zero.
pub fn suggest_settlements(balances: &HashMap<String, i64>) -> Vec<SettlementSuggestion> {
    let mut creditors: Vec<(String, i64)> = balances
        .iter()
        .filter_map(|(id, &bal)| {
            if bal > SETTLED_EPSILON {
                Some((id.clone(), bal))
            } else {
                None
            }
        })
        .collect();
    let mut debtors: Vec<(String, i64)> = balances
        .iter()
        .filter_map(|(id, &bal)| {
            if bal < -SETTLED_EPSILON {
                Some((id.clone(), -bal))
            } else {
                None
            }
        })
        .collect();

    creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    debtors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut suggestions = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let settled = debtors[i].1.min(creditors[j].1);
        if settled > 0 {
            suggestions.push(SettlementSuggestion {
                from: debtors[i].0.clone(),
                to: creditors[j].0.clone(),
                amount: settled,
            });
        }

        debtors[i].1 -= settled;
        creditors[j].1 -= settled;

        if debtors[i].1 == 0 {
            i += 1;
        }
        if creditors[j].1 == 0 {
            j += 1;
        }
    }

    debug!("Suggested {} settlements", suggestions.len());
    suggestions
}
