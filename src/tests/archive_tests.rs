use crate::archive::{EXPENSE_DELETED_REASON, archive_expense, archive_group, remove_member};
use crate::error::LedgerError;
use crate::models::{Group, GroupMember, RecordState, SettlementStatus};
use crate::tests::{day, expense, settlement, share};

fn roster(id: &str, members: &[(&str, &str)]) -> Group {
    Group {
        id: id.to_string(),
        name: "trip".to_string(),
        members: members
            .iter()
            .map(|(participant, name)| GroupMember {
                participant: participant.to_string(),
                display_name: name.to_string(),
                joined_at: day(1),
                removed_at: None,
            })
            .collect(),
        created_at: day(1),
        state: RecordState::Active,
    }
}

#[test]
fn archiving_an_expense_moves_it_out_of_the_active_state() {
    let _ = env_logger::try_init();
    let e = expense("e1", "a", 100, vec![share("b", 100)]);
    let archival = archive_expense(&e, &[], day(5));

    assert!(archival.expense.state.is_archived());
    assert_eq!(archival.expense.id, e.id);
    assert!(archival.cancelled_settlements.is_empty());
}

#[test]
fn archiving_is_idempotent() {
    let e = expense("e1", "a", 100, vec![share("b", 100)]);
    let mut related = settlement("s1", "b", "a", 100, SettlementStatus::Pending);
    related.related_expense_id = Some("e1".to_string());

    let first = archive_expense(&e, &[related.clone()], day(5));
    let second = archive_expense(&first.expense, &[first.cancelled_settlements[0].clone()], day(6));

    assert_eq!(second.expense, first.expense);
    assert!(second.cancelled_settlements.is_empty());
}

#[test]
fn archiving_an_expense_cancels_its_pending_settlements() {
    let e = expense("e1", "a", 100, vec![share("b", 100)]);
    let mut pending = settlement("s1", "b", "a", 100, SettlementStatus::Pending);
    pending.related_expense_id = Some("e1".to_string());
    let mut unrelated = settlement("s2", "b", "a", 50, SettlementStatus::Pending);
    unrelated.related_expense_id = Some("other".to_string());

    let archival = archive_expense(&e, &[pending, unrelated], day(5));

    assert_eq!(archival.cancelled_settlements.len(), 1);
    assert_eq!(archival.cancelled_settlements[0].id, "s1");
    match &archival.cancelled_settlements[0].status {
        SettlementStatus::Cancelled { reason, .. } => assert_eq!(reason, EXPENSE_DELETED_REASON),
        other => panic!("expected cancelled, got {:?}", other),
    }
}

#[test]
fn cascade_leaves_completed_settlements_alone() {
    let e = expense("e1", "a", 100, vec![share("b", 100)]);
    let mut done = settlement(
        "s1",
        "b",
        "a",
        100,
        SettlementStatus::Completed { completed_at: day(3) },
    );
    done.related_expense_id = Some("e1".to_string());

    let archival = archive_expense(&e, &[done], day(5));
    assert!(archival.cancelled_settlements.is_empty());
}

#[test]
fn replacement_edit_keeps_the_archival_state() {
    let mut archived = expense("e1", "a", 100, vec![share("b", 100)]);
    archived.state = RecordState::archived(day(5), None);

    let edited = archived.replaced(200, vec![share("b", 200)]).unwrap();
    assert_eq!(edited.state, archived.state);
}

#[test]
fn group_archival_annotates_every_owned_record() {
    let group = roster("g1", &[("a", "Alice"), ("b", "Bob")]);
    let expenses = vec![
        expense("e1", "a", 100, vec![share("b", 100)]),
        expense("e2", "b", 50, vec![share("a", 50)]),
    ];
    let settlements = vec![settlement("s1", "b", "a", 100, SettlementStatus::Pending)];

    let archival = archive_group(&group, &expenses, &settlements, day(5));

    assert!(archival.group.state.is_archived());
    assert_eq!(archival.expenses.len(), 2);
    assert_eq!(archival.settlements.len(), 1);
    for e in &archival.expenses {
        assert_eq!(
            e.state,
            RecordState::archived(day(5), Some("g1".to_string()))
        );
    }
    // Statuses are untouched; the archived pending settlement just never applies.
    assert_eq!(archival.settlements[0].status, SettlementStatus::Pending);
}

#[test]
fn group_archival_skips_records_of_other_groups() {
    let group = roster("g1", &[("a", "Alice")]);
    let mut foreign = expense("e1", "a", 100, vec![share("a", 100)]);
    foreign.group = Some("g2".to_string());
    let mut ungrouped = expense("e2", "a", 100, vec![share("a", 50), share("b", 50)]);
    ungrouped.group = None;

    let archival = archive_group(&group, &[foreign, ungrouped], &[], day(5));
    assert!(archival.expenses.is_empty());
}

#[test]
fn removed_member_keeps_display_name_snapshot() {
    let group = roster("g1", &[("a", "Alice"), ("b", "Bob")]);
    let updated = remove_member(&group, "b", day(5)).unwrap();

    assert!(!updated.is_member("b"));
    assert_eq!(updated.display_name("b"), Some("Bob"));
    // Historical splits keyed by "b" stay resolvable.
    assert_eq!(updated.members.len(), 2);
}

#[test]
fn removing_unknown_member_is_an_error() {
    let group = roster("g1", &[("a", "Alice")]);
    let result = remove_member(&group, "ghost", day(5));
    assert!(matches!(result, Err(LedgerError::MemberNotFound { .. })));
}
