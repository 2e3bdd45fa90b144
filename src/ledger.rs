//! Balance fold: collapses a set of expense records into a signed balance per
//! participant. Positive means the participant is owed money by the ledger,
//! negative means they owe it. For any valid set of expenses the balances sum
//! to exactly zero.

use crate::models::Expense;
use log::debug;
use std::collections::HashMap;

/// Which archival partition a balance computation reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceScope {
    /// The live balance: archived expenses are invisible.
    ActiveOnly,
    /// Historical reconstruction over active and archived records.
    IncludeArchived,
}

/// Live balances over the active expense set.
pub fn compute_balances(expenses: &[Expense]) -> HashMap<String, i64> {
    compute_balances_scoped(expenses, BalanceScope::ActiveOnly)
}

/// For each expense in scope, the payer is credited the full amount and every
/// split participant is debited their share. The payer nets
/// `amount - own share`; everyone else nets minus their share.
pub fn compute_balances_scoped(expenses: &[Expense], scope: BalanceScope) -> HashMap<String, i64> {
    let mut balances: HashMap<String, i64> = HashMap::new();

    for expense in expenses
        .iter()
        .filter(|e| scope == BalanceScope::IncludeArchived || e.state.is_active())
    {
        *balances.entry(expense.payer.clone()).or_insert(0) += expense.amount;
        for share in &expense.splits {
            *balances.entry(share.participant.clone()).or_insert(0) -= share.amount;
        }
    }

    debug!("Folded {} expenses into balances: {:?}", expenses.len(), balances);
    balances
}
