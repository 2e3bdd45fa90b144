//! Read-side history composition: merges active and archived records touching
//! one participant into a single chronological sequence. Never mutates
//! archival state.

use crate::ledger::{BalanceScope, compute_balances_scoped};
use crate::models::{Expense, LedgerSnapshot, Settlement};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryRecord {
    Expense(Expense),
    Settlement(Settlement),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub record: HistoryRecord,
    /// True for records in the archived partition.
    pub is_historical: bool,
    pub date: DateTime<Utc>,
}

impl HistoryEntry {
    fn id(&self) -> &str {
        match &self.record {
            HistoryRecord::Expense(e) => &e.id,
            HistoryRecord::Settlement(s) => &s.id,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        match &self.record {
            HistoryRecord::Expense(e) => e.created_at,
            HistoryRecord::Settlement(s) => s.created_at,
        }
    }
}

/// Every expense and settlement touching `participant`, active and archived
/// alike, newest first. Ties on `date` break on `created_at` then id so the
/// ordering is reproducible.
pub fn history_for(participant: &str, snapshot: &LedgerSnapshot) -> Vec<HistoryEntry> {
    let mut entries: Vec<HistoryEntry> = Vec::new();

    for expense in snapshot.expenses.iter().filter(|e| e.touches(participant)) {
        entries.push(HistoryEntry {
            is_historical: expense.state.is_archived(),
            date: expense.date,
            record: HistoryRecord::Expense(expense.clone()),
        });
    }
    for settlement in snapshot
        .settlements
        .iter()
        .filter(|s| s.touches(participant))
    {
        entries.push(HistoryEntry {
            is_historical: settlement.state.is_archived(),
            date: settlement.date,
            record: HistoryRecord::Settlement(settlement.clone()),
        });
    }

    entries.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at().cmp(&a.created_at()))
            .then_with(|| a.id().cmp(b.id()))
    });
    entries
}

/// Reconstructs balances over the union of active and archived expenses, the
/// "include history" variant of the live fold.
pub fn historical_balances(snapshot: &LedgerSnapshot) -> HashMap<String, i64> {
    compute_balances_scoped(&snapshot.expenses, BalanceScope::IncludeArchived)
}
