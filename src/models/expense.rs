use super::state::RecordState;
use crate::constants::MIN_UNGROUPED_PARTICIPANTS;
use crate::error::LedgerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One participant's portion of an expense, in minor units. A full split is a
/// `Vec<Share>` whose order is the participant order supplied at creation;
/// remainder distribution depends on it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Share {
    pub participant: String,
    pub amount: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expense {
    pub id: String,
    /// Owning group; `None` marks an ad hoc (ungrouped) expense.
    pub group: Option<String>,
    pub payer: String,
    /// Total amount in minor units.
    pub amount: i64,
    pub splits: Vec<Share>,
    /// User-facing transaction date.
    pub date: DateTime<Utc>,
    /// Ledger insertion time.
    pub created_at: DateTime<Utc>,
    pub state: RecordState,
}

impl Expense {
    /// Builds a validated, active expense. The split must cover each
    /// participant exactly once with non-negative shares summing to `amount`.
    pub fn new(
        id: String,
        group: Option<String>,
        payer: String,
        amount: i64,
        splits: Vec<Share>,
        date: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        validate_split(amount, &splits)?;
        if group.is_none() && splits.len() < MIN_UNGROUPED_PARTICIPANTS {
            return Err(LedgerError::UngroupedExpenseTooSmall(splits.len()));
        }
        Ok(Expense {
            id,
            group,
            payer,
            amount,
            splits,
            date,
            created_at,
            state: RecordState::Active,
        })
    }

    /// Full-replacement edit: same record identity and archival state, new
    /// amount and split, re-validated from scratch. An edit never moves a
    /// record between the active and archived partitions.
    pub fn replaced(&self, amount: i64, splits: Vec<Share>) -> Result<Self, LedgerError> {
        let mut updated = Expense::new(
            self.id.clone(),
            self.group.clone(),
            self.payer.clone(),
            amount,
            splits,
            self.date,
            self.created_at,
        )?;
        updated.state = self.state.clone();
        Ok(updated)
    }

    pub fn touches(&self, participant: &str) -> bool {
        self.payer == participant || self.splits.iter().any(|s| s.participant == participant)
    }
}

/// Shared by construction and edit: every mutation re-checks the sum
/// invariant.
pub fn validate_split(amount: i64, splits: &[Share]) -> Result<(), LedgerError> {
    let mut seen = HashSet::new();
    for share in splits {
        if share.amount < 0 {
            return Err(LedgerError::NegativeShare {
                participant: share.participant.clone(),
                amount: share.amount,
            });
        }
        if !seen.insert(share.participant.as_str()) {
            return Err(LedgerError::DuplicateSplitParticipant(
                share.participant.clone(),
            ));
        }
    }
    let total: i64 = splits.iter().map(|s| s.amount).sum();
    if total != amount {
        return Err(LedgerError::SplitMismatch {
            expected: amount,
            actual: total,
        });
    }
    Ok(())
}
