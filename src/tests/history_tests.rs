use crate::history::{HistoryRecord, historical_balances, history_for};
use crate::models::{LedgerSnapshot, RecordState, SettlementStatus};
use crate::tests::{day, expense, settlement, share};

fn snapshot() -> LedgerSnapshot {
    let mut old = expense("e1", "a", 100, vec![share("b", 100)]);
    old.date = day(1);
    old.state = RecordState::archived(day(9), Some("g1".to_string()));

    let mut recent = expense("e2", "b", 60, vec![share("a", 60)]);
    recent.date = day(3);

    let mut paid = settlement(
        "s1",
        "b",
        "a",
        100,
        SettlementStatus::Completed { completed_at: day(2) },
    );
    paid.date = day(2);

    let mut foreign = expense("e3", "x", 40, vec![share("y", 40)]);
    foreign.date = day(4);

    LedgerSnapshot {
        expenses: vec![old, recent, foreign],
        settlements: vec![paid],
        groups: Vec::new(),
    }
}

#[test]
fn history_merges_both_record_kinds_newest_first() {
    let _ = env_logger::try_init();
    let entries = history_for("a", &snapshot());

    let ids: Vec<&str> = entries
        .iter()
        .map(|e| match &e.record {
            HistoryRecord::Expense(x) => x.id.as_str(),
            HistoryRecord::Settlement(s) => s.id.as_str(),
        })
        .collect();
    assert_eq!(ids, vec!["e2", "s1", "e1"]);
}

#[test]
fn history_tags_archived_records_as_historical() {
    let entries = history_for("a", &snapshot());
    assert!(!entries[0].is_historical); // e2, active
    assert!(!entries[1].is_historical); // s1, active
    assert!(entries[2].is_historical); // e1, archived with the group
}

#[test]
fn history_excludes_untouched_participants_records() {
    let entries = history_for("a", &snapshot());
    assert!(entries.iter().all(|e| match &e.record {
        HistoryRecord::Expense(x) => x.touches("a"),
        HistoryRecord::Settlement(s) => s.touches("a"),
    }));
}

#[test]
fn history_is_a_pure_read() {
    let snap = snapshot();
    let before = snap.clone();
    let _ = history_for("a", &snap);
    assert_eq!(snap.expenses, before.expenses);
    assert_eq!(snap.settlements, before.settlements);
}

#[test]
fn historical_balances_fold_the_archived_union() {
    let snap = snapshot();
    let balances = historical_balances(&snap);

    // e1 (archived) counts here even though the live fold skips it.
    assert_eq!(balances["a"], 100 - 60);
    assert_eq!(balances["b"], 60 - 100);
    assert_eq!(balances.values().sum::<i64>(), 0);
}
