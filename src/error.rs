use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize, PartialEq, Eq)]
pub enum LedgerError {
    /// Expense or settlement amount must be strictly positive
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    /// Split computation was asked to divide a negative amount
    #[error("Cannot split negative amount {0}")]
    NegativeAmount(i64),

    /// A split share came out negative
    #[error("Negative share {amount} for participant {participant}")]
    NegativeShare { participant: String, amount: i64 },

    /// The same participant appears twice in one split
    #[error("Participant {0} listed more than once in split")]
    DuplicateSplitParticipant(String),

    /// Split shares don't add up to the expense amount
    #[error("Split total {actual} does not match amount {expected}")]
    SplitMismatch { expected: i64, actual: i64 },

    /// An ungrouped expense needs at least two participants
    #[error("Ungrouped expense requires at least two participants, got {0}")]
    UngroupedExpenseTooSmall(usize),

    /// Cannot create a settlement from a participant to themselves
    #[error("Cannot create settlement from {0} to themselves")]
    SelfSettlement(String),

    /// Expense with given ID not found in the snapshot
    #[error("Expense {0} not found")]
    ExpenseNotFound(String),

    /// Settlement with given ID not found in the snapshot
    #[error("Settlement {0} not found")]
    SettlementNotFound(String),

    /// Group with given ID not found in the snapshot
    #[error("Group {0} not found")]
    GroupNotFound(String),

    /// Participant is not on the group roster
    #[error("Participant {participant} is not a member of group {group}")]
    MemberNotFound { group: String, participant: String },

    /// Settlement has already reached a terminal status
    #[error("Settlement {id} is already {status}")]
    SettlementTerminal { id: String, status: String },

    /// A record with this ID already exists in storage
    #[error("Record {0} already exists")]
    DuplicateRecord(String),
}
