use crate::archive;
use crate::error::LedgerError;
use crate::history::{self, HistoryEntry};
use crate::ledger;
use crate::logger::AuditLogger;
use crate::models::*;
use crate::reconcile::{self, BalanceView, SettlementSuggestion};
use crate::split::{self, ProposedShare};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use uuid::Uuid;

/// How an expense amount is divided among participants.
pub enum SplitInput {
    /// Even division across the listed participants, in order; the first few
    /// absorb any remainder minor units.
    Equal { participants: Vec<String> },
    /// Caller-proposed shares, normalized to sum exactly to the amount.
    Custom { proposed: Vec<ProposedShare> },
}

/// Orchestrates the pure reconciliation core over injected collaborators.
/// Holds no state of its own: every read recomputes from a full storage
/// snapshot, every mutation validates and computes the complete new record
/// states before the first write.
pub struct LedgerService<'a> {
    pub storage: &'a mut dyn Storage,
    pub audit_logger: &'a mut dyn AuditLogger,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a mut dyn Storage, audit_logger: &'a mut dyn AuditLogger) -> Self {
        info!("Initializing LedgerService");
        Self {
            storage,
            audit_logger,
        }
    }

    // GROUP MANAGEMENT

    pub fn create_group(
        &mut self,
        name: String,
        members: Vec<(String, String)>, // (participant id, display name)
    ) -> Result<Group, LedgerError> {
        info!("Creating group '{}' with {} members", name, members.len());
        let now = Utc::now();
        let group = Group {
            id: Uuid::new_v4().to_string(),
            name,
            members: members
                .into_iter()
                .map(|(participant, display_name)| GroupMember {
                    participant,
                    display_name,
                    joined_at: now,
                    removed_at: None,
                })
                .collect(),
            created_at: now,
            state: RecordState::Active,
        };

        let created = self.storage.create_group(group)?;
        debug!("Group created with ID: {}", created.id);

        self.audit_logger.log(AuditLogEntry::new(
            AuditAction::CreateGroup,
            &serde_json::json!({ "group_id": created.id }),
            now,
        ));

        Ok(created)
    }

    /// Marks a member removed. Their entry stays on the roster as a display
    /// name snapshot for records that still reference them.
    pub fn remove_member(
        &mut self,
        group_id: &str,
        participant: &str,
    ) -> Result<Group, LedgerError> {
        info!("Removing member {} from group {}", participant, group_id);
        let group = self
            .storage
            .get_group(group_id)
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))?;

        let now = Utc::now();
        let updated = archive::remove_member(&group, participant, now)?;
        let saved = self.storage.update_group(updated)?;

        self.audit_logger.log(AuditLogEntry::new(
            AuditAction::RemoveMember,
            &serde_json::json!({ "group_id": group_id, "participant": participant }),
            now,
        ));

        Ok(saved)
    }

    /// Archives a group and every record it owns. The full replacement set is
    /// computed up front, so the persisted outcome is all-or-nothing.
    pub fn archive_group(&mut self, group_id: &str) -> Result<(), LedgerError> {
        info!("Archiving group {}", group_id);
        let group = self
            .storage
            .get_group(group_id)
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))?;

        let now = Utc::now();
        let snapshot = self.storage.snapshot();
        let archival =
            archive::archive_group(&group, &snapshot.expenses, &snapshot.settlements, now);

        self.storage.update_group(archival.group)?;
        for expense in archival.expenses {
            self.storage.update_expense(expense)?;
        }
        for settlement in archival.settlements {
            self.storage.update_settlement(settlement)?;
        }

        self.audit_logger.log(AuditLogEntry::new(
            AuditAction::ArchiveGroup,
            &serde_json::json!({ "group_id": group_id }),
            now,
        ));

        debug!("Group {} archived", group_id);
        Ok(())
    }

    // EXPENSE MANAGEMENT

    pub fn create_expense(
        &mut self,
        group: Option<&str>,
        payer: String,
        amount: i64,
        split: SplitInput,
        date: DateTime<Utc>,
    ) -> Result<Expense, LedgerError> {
        info!(
            "Creating expense of {} paid by {} in group {:?}",
            amount, payer, group
        );
        let now = Utc::now();
        let splits = match split {
            SplitInput::Equal { participants } => split::equal_split(amount, &participants)?,
            SplitInput::Custom { proposed } => split::adjust_custom_splits(amount, &proposed)?,
        };

        if let Some(group_id) = group {
            let roster = self
                .storage
                .get_group(group_id)
                .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))?;
            if roster.state.is_archived() {
                warn!("Rejecting expense against archived group {}", group_id);
                return Err(LedgerError::GroupNotFound(group_id.to_string()));
            }
            for share in &splits {
                if !roster.is_member(&share.participant) {
                    warn!(
                        "Split participant {} not in group {}",
                        share.participant, group_id
                    );
                    return Err(LedgerError::MemberNotFound {
                        group: group_id.to_string(),
                        participant: share.participant.clone(),
                    });
                }
            }
        }

        let expense = Expense::new(
            Uuid::new_v4().to_string(),
            group.map(String::from),
            payer,
            amount,
            splits,
            date,
            now,
        )?;

        let created = self.storage.create_expense(expense)?;
        debug!("Expense created with ID: {}", created.id);

        self.audit_logger.log(AuditLogEntry::new(
            AuditAction::CreateExpense,
            &serde_json::json!({ "expense_id": created.id, "group_id": created.group, "amount": amount }),
            now,
        ));

        Ok(created)
    }

    /// Full-replacement edit. The new amount and split pass the same
    /// validation as creation; nothing is persisted if they don't.
    pub fn update_expense(
        &mut self,
        expense_id: &str,
        new_amount: i64,
        split: SplitInput,
    ) -> Result<Expense, LedgerError> {
        info!("Updating expense {}", expense_id);
        let existing = self
            .storage
            .get_expense(expense_id)
            .ok_or_else(|| LedgerError::ExpenseNotFound(expense_id.to_string()))?;
        if existing.state.is_archived() {
            warn!("Rejecting edit of archived expense {}", expense_id);
            return Err(LedgerError::ExpenseNotFound(expense_id.to_string()));
        }

        let splits = match split {
            SplitInput::Equal { participants } => split::equal_split(new_amount, &participants)?,
            SplitInput::Custom { proposed } => split::adjust_custom_splits(new_amount, &proposed)?,
        };
        let updated = existing.replaced(new_amount, splits)?;
        let saved = self.storage.update_expense(updated)?;
        debug!("Expense updated: {}", saved.id);

        self.audit_logger.log(AuditLogEntry::new(
            AuditAction::UpdateExpense,
            &serde_json::json!({ "expense_id": saved.id, "new_amount": new_amount }),
            Utc::now(),
        ));

        Ok(saved)
    }

    /// Archives an expense and cancels any pending settlement that referenced
    /// it. Re-archiving is a no-op.
    pub fn archive_expense(&mut self, expense_id: &str) -> Result<Expense, LedgerError> {
        info!("Archiving expense {}", expense_id);
        let expense = self
            .storage
            .get_expense(expense_id)
            .ok_or_else(|| LedgerError::ExpenseNotFound(expense_id.to_string()))?;

        let now = Utc::now();
        let snapshot = self.storage.snapshot();
        let archival = archive::archive_expense(&expense, &snapshot.settlements, now);

        let saved = self.storage.update_expense(archival.expense)?;
        for settlement in archival.cancelled_settlements {
            debug!(
                "Cancelling settlement {} tied to archived expense {}",
                settlement.id, expense_id
            );
            self.storage.update_settlement(settlement)?;
        }

        self.audit_logger.log(AuditLogEntry::new(
            AuditAction::ArchiveExpense,
            &serde_json::json!({ "expense_id": expense_id }),
            now,
        ));

        Ok(saved)
    }

    // SETTLEMENT MANAGEMENT

    /// Records a settlement, pending or (for the "mark as settled" action)
    /// directly completed.
    pub fn record_settlement(
        &mut self,
        from_user: String,
        to_user: String,
        amount: i64,
        group: Option<&str>,
        related_expense_id: Option<&str>,
        date: DateTime<Utc>,
        mark_completed: bool,
    ) -> Result<Settlement, LedgerError> {
        info!(
            "Recording settlement of {} from {} to {}",
            amount, from_user, to_user
        );
        let now = Utc::now();

        // Archived referents are invisible to new records.
        if let Some(group_id) = group {
            match self.storage.get_group(group_id) {
                Some(g) if g.state.is_active() => {}
                _ => return Err(LedgerError::GroupNotFound(group_id.to_string())),
            }
        }
        if let Some(expense_id) = related_expense_id {
            match self.storage.get_expense(expense_id) {
                Some(e) if e.state.is_active() => {}
                _ => return Err(LedgerError::ExpenseNotFound(expense_id.to_string())),
            }
        }

        let status = if mark_completed {
            SettlementStatus::Completed { completed_at: now }
        } else {
            SettlementStatus::Pending
        };
        let settlement = Settlement::new(
            Uuid::new_v4().to_string(),
            from_user,
            to_user,
            amount,
            group.map(String::from),
            status,
            date,
            now,
            related_expense_id.map(String::from),
        )?;

        let created = self.storage.create_settlement(settlement)?;
        debug!("Settlement created with ID: {}", created.id);

        self.audit_logger.log(AuditLogEntry::new(
            AuditAction::RecordSettlement,
            &serde_json::json!({
                "settlement_id": created.id,
                "amount": amount,
                "status": created.status.to_string(),
            }),
            now,
        ));

        Ok(created)
    }

    pub fn complete_settlement(&mut self, settlement_id: &str) -> Result<Settlement, LedgerError> {
        info!("Completing settlement {}", settlement_id);
        let settlement = self
            .storage
            .get_settlement(settlement_id)
            .filter(|s| s.state.is_active())
            .ok_or_else(|| LedgerError::SettlementNotFound(settlement_id.to_string()))?;

        let now = Utc::now();
        let completed = settlement.complete(now)?;
        let saved = self.storage.update_settlement(completed)?;

        self.audit_logger.log(AuditLogEntry::new(
            AuditAction::CompleteSettlement,
            &serde_json::json!({ "settlement_id": settlement_id }),
            now,
        ));

        Ok(saved)
    }

    pub fn cancel_settlement(
        &mut self,
        settlement_id: &str,
        reason: &str,
    ) -> Result<Settlement, LedgerError> {
        info!("Cancelling settlement {}: {}", settlement_id, reason);
        let settlement = self
            .storage
            .get_settlement(settlement_id)
            .filter(|s| s.state.is_active())
            .ok_or_else(|| LedgerError::SettlementNotFound(settlement_id.to_string()))?;

        let now = Utc::now();
        let cancelled = settlement.cancel(now, reason)?;
        let saved = self.storage.update_settlement(cancelled)?;

        self.audit_logger.log(AuditLogEntry::new(
            AuditAction::CancelSettlement,
            &serde_json::json!({ "settlement_id": settlement_id, "reason": reason }),
            now,
        ));

        Ok(saved)
    }

    // READ SIDE

    /// Live balances reconciled and partitioned for one viewer. Always a full
    /// recomputation from the current snapshot; nothing incremental to
    /// double-count on replay.
    pub fn balances_for(&self, viewer: &str) -> BalanceView {
        debug!("Computing balance view for {}", viewer);
        let snapshot = self.storage.snapshot();
        let balances = ledger::compute_balances(&snapshot.expenses);
        reconcile::reconcile(balances, &snapshot.settlements, viewer)
    }

    /// Payments that would settle the current live balances.
    pub fn settlement_suggestions(&self) -> Vec<SettlementSuggestion> {
        let snapshot = self.storage.snapshot();
        let mut balances = ledger::compute_balances(&snapshot.expenses);
        reconcile::apply_settlements(&mut balances, &snapshot.settlements);
        reconcile::suggest_settlements(&balances)
    }

    /// Merged active + archived history for one participant, newest first.
    pub fn history_for(&self, participant: &str) -> Vec<HistoryEntry> {
        history::history_for(participant, &self.storage.snapshot())
    }

    /// Display name lookup that keeps working for removed members.
    pub fn display_name(&self, group_id: &str, participant: &str) -> Result<String, LedgerError> {
        let group = self
            .storage
            .get_group(group_id)
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))?;
        group
            .display_name(participant)
            .map(String::from)
            .ok_or_else(|| LedgerError::MemberNotFound {
                group: group_id.to_string(),
                participant: participant.to_string(),
            })
    }
}
