mod archive_tests;
mod history_tests;
mod ledger_tests;

use crate::models::{Expense, RecordState, Settlement, SettlementStatus, Share};
use chrono::{DateTime, TimeZone, Utc};

pub fn day(n: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, n, 12, 0, 0).unwrap()
}

pub fn share(participant: &str, amount: i64) -> Share {
    Share {
        participant: participant.to_string(),
        amount,
    }
}

pub fn expense(id: &str, payer: &str, amount: i64, splits: Vec<Share>) -> Expense {
    Expense {
        id: id.to_string(),
        group: Some("g1".to_string()),
        payer: payer.to_string(),
        amount,
        splits,
        date: day(1),
        created_at: day(1),
        state: RecordState::Active,
    }
}

pub fn settlement(id: &str, from: &str, to: &str, amount: i64, status: SettlementStatus) -> Settlement {
    Settlement {
        id: id.to_string(),
        from_user: from.to_string(),
        to_user: to.to_string(),
        amount,
        group: Some("g1".to_string()),
        status,
        date: day(2),
        created_at: day(2),
        related_expense_id: None,
        state: RecordState::Active,
    }
}
