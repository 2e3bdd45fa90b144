use super::state::RecordState;
use crate::error::LedgerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettlementStatus {
    Pending,
    Completed {
        completed_at: DateTime<Utc>,
    },
    Cancelled {
        cancelled_at: DateTime<Utc>,
        reason: String,
    },
}

impl SettlementStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, SettlementStatus::Completed { .. })
    }

    /// Completed and cancelled settlements accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SettlementStatus::Pending)
    }
}

impl std::fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SettlementStatus::Pending => "pending",
            SettlementStatus::Completed { .. } => "completed",
            SettlementStatus::Cancelled { .. } => "cancelled",
        };
        write!(f, "{}", s)
    }
}

/// A payment between two participants, proposed or carried out, which offsets
/// balances once completed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    pub id: String,
    pub from_user: String,
    pub to_user: String,
    /// Amount in minor units.
    pub amount: i64,
    pub group: Option<String>,
    pub status: SettlementStatus,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Expense this settlement pays down, if any. Archiving that expense
    /// cancels this settlement while it is still pending.
    pub related_expense_id: Option<String>,
    pub state: RecordState,
}

impl Settlement {
    pub fn new(
        id: String,
        from_user: String,
        to_user: String,
        amount: i64,
        group: Option<String>,
        status: SettlementStatus,
        date: DateTime<Utc>,
        created_at: DateTime<Utc>,
        related_expense_id: Option<String>,
    ) -> Result<Self, LedgerError> {
        if from_user == to_user {
            return Err(LedgerError::SelfSettlement(from_user));
        }
        if amount <= 0 {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        Ok(Settlement {
            id,
            from_user,
            to_user,
            amount,
            group,
            status,
            date,
            created_at,
            related_expense_id,
            state: RecordState::Active,
        })
    }

    /// `pending -> completed`. Rejects terminal states.
    pub fn complete(&self, now: DateTime<Utc>) -> Result<Self, LedgerError> {
        if self.status.is_terminal() {
            return Err(LedgerError::SettlementTerminal {
                id: self.id.clone(),
                status: self.status.to_string(),
            });
        }
        let mut completed = self.clone();
        completed.status = SettlementStatus::Completed { completed_at: now };
        Ok(completed)
    }

    /// `pending -> cancelled`. Rejects terminal states.
    pub fn cancel(&self, now: DateTime<Utc>, reason: &str) -> Result<Self, LedgerError> {
        if self.status.is_terminal() {
            return Err(LedgerError::SettlementTerminal {
                id: self.id.clone(),
                status: self.status.to_string(),
            });
        }
        let mut cancelled = self.clone();
        cancelled.status = SettlementStatus::Cancelled {
            cancelled_at: now,
            reason: reason.to_string(),
        };
        Ok(cancelled)
    }

    pub fn touches(&self, participant: &str) -> bool {
        self.from_user == participant || self.to_user == participant
    }
}
