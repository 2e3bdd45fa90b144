use crate::ledger::{BalanceScope, compute_balances, compute_balances_scoped};
use crate::models::RecordState;
use crate::tests::{day, expense, share};

#[test]
fn payer_is_credited_and_participants_debited() {
    let _ = env_logger::try_init();
    let expenses = vec![expense(
        "e1",
        "U1",
        1500,
        vec![share("U1", 500), share("U2", 500), share("U3", 500)],
    )];

    let balances = compute_balances(&expenses);
    assert_eq!(balances["U1"], 1000);
    assert_eq!(balances["U2"], -500);
    assert_eq!(balances["U3"], -500);
}

#[test]
fn balances_always_sum_to_zero() {
    let expenses = vec![
        expense("e1", "a", 1500, vec![share("a", 500), share("b", 500), share("c", 500)]),
        expense("e2", "b", 999, vec![share("a", 334), share("b", 333), share("c", 332)]),
        expense("e3", "c", 70, vec![share("a", 35), share("b", 35)]),
        expense("e4", "a", 1, vec![share("b", 1)]),
    ];

    let balances = compute_balances(&expenses);
    assert_eq!(balances.values().sum::<i64>(), 0);
}

#[test]
fn archived_expenses_are_excluded_from_live_balances() {
    let mut archived = expense("e1", "a", 100, vec![share("b", 100)]);
    archived.state = RecordState::archived(day(3), None);
    let expenses = vec![archived, expense("e2", "b", 40, vec![share("a", 40)])];

    let balances = compute_balances(&expenses);
    assert_eq!(balances["b"], 40);
    assert_eq!(balances["a"], -40);
}

#[test]
fn scoped_fold_can_include_archived_expenses() {
    let mut archived = expense("e1", "a", 100, vec![share("b", 100)]);
    archived.state = RecordState::archived(day(3), None);
    let expenses = vec![archived, expense("e2", "b", 40, vec![share("a", 40)])];

    let balances = compute_balances_scoped(&expenses, BalanceScope::IncludeArchived);
    assert_eq!(balances["a"], 60);
    assert_eq!(balances["b"], -60);
    assert_eq!(balances.values().sum::<i64>(), 0);
}

#[test]
fn empty_expense_set_yields_empty_balances() {
    assert!(compute_balances(&[]).is_empty());
}
