//! Archival policy: deletion requests never erase records, they compute the
//! archived replacement states. Everything here is pure; the caller persists
//! the returned records, all of them or none.

use crate::error::LedgerError;
use crate::models::{Expense, Group, RecordState, Settlement};
use chrono::{DateTime, Utc};
use log::debug;

/// Expense-deleted cancellation reason carried on cascaded settlements.
pub const EXPENSE_DELETED_REASON: &str = "expense deleted";

/// New states produced by archiving one expense.
#[derive(Clone, Debug)]
pub struct ExpenseArchival {
    pub expense: Expense,
    /// Pending settlements that referenced the expense, now cancelled.
    pub cancelled_settlements: Vec<Settlement>,
}

/// New states produced by archiving a whole group.
#[derive(Clone, Debug)]
pub struct GroupArchival {
    pub group: Group,
    pub expenses: Vec<Expense>,
    pub settlements: Vec<Settlement>,
}

/// Archives an expense and cancels any still-pending settlement that pays it
/// down, so no settlement keeps asserting a payment against an expense that
/// is gone from the active set. Completed and cancelled settlements are
/// terminal and stay as they are.
///
/// Idempotent: an already-archived expense comes back unchanged with no new
/// cancellations.
pub fn archive_expense(
    expense: &Expense,
    settlements: &[Settlement],
    now: DateTime<Utc>,
) -> ExpenseArchival {
    if expense.state.is_archived() {
        debug!("Expense {} already archived, no-op", expense.id);
        return ExpenseArchival {
            expense: expense.clone(),
            cancelled_settlements: Vec::new(),
        };
    }

    let mut archived = expense.clone();
    archived.state = RecordState::archived(now, None);

    let cancelled_settlements = settlements
        .iter()
        .filter(|s| {
            s.related_expense_id.as_deref() == Some(expense.id.as_str())
                && !s.status.is_terminal()
        })
        .map(|s| {
            // cancel() cannot fail here: terminal statuses were filtered out
            s.cancel(now, EXPENSE_DELETED_REASON)
                .unwrap_or_else(|_| s.clone())
        })
        .collect();

    ExpenseArchival {
        expense: archived,
        cancelled_settlements,
    }
}

/// Archives every active record owned by the group, the group itself
/// included, annotating each with the group it was deleted from. Settlement
/// statuses are untouched; an archived pending settlement simply never
/// applies. The whole result is computed before anything is persisted, so the
/// caller can apply it all-or-nothing.
///
/// Idempotent: already-archived records are passed through unchanged.
pub fn archive_group(
    group: &Group,
    expenses: &[Expense],
    settlements: &[Settlement],
    now: DateTime<Utc>,
) -> GroupArchival {
    let mut archived_group = group.clone();
    if archived_group.state.is_active() {
        archived_group.state = RecordState::archived(now, None);
    }

    let expenses = expenses
        .iter()
        .filter(|e| e.group.as_deref() == Some(group.id.as_str()))
        .map(|e| {
            let mut archived = e.clone();
            if archived.state.is_active() {
                archived.state = RecordState::archived(now, Some(group.id.clone()));
            }
            archived
        })
        .collect::<Vec<_>>();

    let settlements = settlements
        .iter()
        .filter(|s| s.group.as_deref() == Some(group.id.as_str()))
        .map(|s| {
            let mut archived = s.clone();
            if archived.state.is_active() {
                archived.state = RecordState::archived(now, Some(group.id.clone()));
            }
            archived
        })
        .collect::<Vec<_>>();

    debug!(
        "Archiving group {}: {} expenses, {} settlements",
        group.id,
        expenses.len(),
        settlements.len()
    );

    GroupArchival {
        group: archived_group,
        expenses,
        settlements,
    }
}

/// Marks a roster member as removed without touching the entry itself, so
/// historical splits keep resolving the display name from the roster
/// snapshot. Removing an already-removed member is a no-op.
pub fn remove_member(
    group: &Group,
    participant: &str,
    now: DateTime<Utc>,
) -> Result<Group, LedgerError> {
    let mut updated = group.clone();
    let member = updated
        .members
        .iter_mut()
        .find(|m| m.participant == participant)
        .ok_or_else(|| LedgerError::MemberNotFound {
            group: group.id.clone(),
            participant: participant.to_string(),
        })?;

    if member.removed_at.is_none() {
        member.removed_at = Some(now);
    }
    Ok(updated)
}
