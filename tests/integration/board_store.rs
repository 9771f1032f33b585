//! Integration tests for the task store: adding, moving, progress, and
//! deletion as seen through the column projection.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use chrono::{DateTime, NaiveDate};
use kanban::board::{FixedClock, RoundRobin, SequentialIds, TaskStore, UuidIds};
use kanban_proto::{ColumnId, Priority, TaskId, TaskPatch};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// 2026-03-01T00:00:00Z.
const NOW_SECS: i64 = 1_772_323_200;

/// An empty store with deterministic ids, assignees, and clock.
fn make_store() -> TaskStore {
    TaskStore::new()
        .with_id_generator(SequentialIds::new("T", 1))
        .with_assignee_picker(RoundRobin::new(vec!["AX".to_string(), "KZ".to_string()]))
        .with_clock(FixedClock(DateTime::from_timestamp(NOW_SECS, 0).unwrap()))
}

fn column_ids(store: &TaskStore, column: ColumnId) -> Vec<String> {
    store
        .project()
        .column(column)
        .tasks
        .iter()
        .map(|t| t.id.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn full_task_lifecycle() {
    let mut store = make_store();

    let t1 = store.add_task("Write docs", ColumnId::Backlog, Priority::High);
    let t2 = store.add_task("Fix login", ColumnId::Backlog, Priority::Critical);
    assert_eq!(t1.as_str(), "T-1");
    assert_eq!(t2.as_str(), "T-2");
    assert_eq!(column_ids(&store, ColumnId::Backlog), ["T-1", "T-2"]);

    let first = store.get(&t1).unwrap();
    assert_eq!(first.progress, 0);
    assert_eq!(first.due_date, NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());
    assert_eq!(first.created_at, 1_772_323_200_000);
    assert_eq!(first.assignee, "AX");
    assert_eq!(store.get(&t2).unwrap().assignee, "KZ");

    assert!(store.move_task(&t1, ColumnId::InProgress));
    assert_eq!(column_ids(&store, ColumnId::Backlog), ["T-2"]);
    assert_eq!(column_ids(&store, ColumnId::InProgress), ["T-1"]);

    assert!(store.update_progress(&t1, 60));
    assert_eq!(store.get(&t1).unwrap().progress, 60);

    assert!(store.move_task(&t1, ColumnId::Done));
    assert_eq!(store.get(&t1).unwrap().progress, 100);

    assert!(store.delete_task(&t1));
    assert!(store.get(&t1).is_none());
    assert!(!store.delete_task(&t1));
    assert_eq!(store.len(), 1);
}

#[test]
fn move_leaves_other_tasks_untouched() {
    let mut store = make_store();

    // T1 in backlog at 45%, T2 in progress at 72%.
    let t1 = store.add_task("Write docs", ColumnId::Backlog, Priority::High);
    let t2 = store.add_task("Fix login", ColumnId::InProgress, Priority::Critical);
    store.update_progress(&t1, 45);
    store.update_progress(&t2, 72);
    let t1_before = store.get(&t1).unwrap().clone();

    assert!(store.move_task(&t2, ColumnId::Done));
    let moved = store.get(&t2).unwrap();
    assert_eq!(moved.column_id, ColumnId::Done);
    assert_eq!(moved.progress, 100);

    let t1_after = store.get(&t1).unwrap();
    assert_eq!(t1_after.id, t1_before.id);
    assert_eq!(t1_after.title, t1_before.title);
    assert_eq!(t1_after.priority, t1_before.priority);
    assert_eq!(t1_after.due_date, t1_before.due_date);
    assert_eq!(t1_after.assignee, t1_before.assignee);
    assert_eq!(t1_after.progress, 45);
    assert_eq!(t1_after.column_id, ColumnId::Backlog);
    assert_eq!(t1_after.created_at, t1_before.created_at);
    assert_eq!(*t1_after, t1_before);

    assert!(store.delete_task(&t1));
    assert_eq!(store.len(), 1);

    let t3 = store.add_task("Ship release", ColumnId::Review, Priority::High);
    let shipped = store.get(&t3).unwrap();
    assert_eq!(t3.as_str(), "T-3");
    assert_eq!(shipped.progress, 0);
    assert_eq!(shipped.column_id, ColumnId::Review);
    assert_eq!(shipped.priority, Priority::High);
    assert_eq!(shipped.due_date, NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());

    let order: Vec<&TaskId> = store.as_slice().iter().map(|t| &t.id).collect();
    assert_eq!(order, [&t2, &t3]);
    assert_eq!(store.project().counts(), [0, 0, 1, 1]);
}

#[test]
fn moving_back_out_of_done_keeps_progress() {
    let mut store = make_store();
    let id = store.add_task("Ship", ColumnId::Review, Priority::Low);
    store.move_task(&id, ColumnId::Done);
    store.move_task(&id, ColumnId::Review);
    let task = store.get(&id).unwrap();
    assert_eq!(task.column_id, ColumnId::Review);
    assert_eq!(task.progress, 100);
}

#[test]
fn moving_to_same_column_keeps_position() {
    let mut store = make_store();
    let a = store.add_task("A", ColumnId::Backlog, Priority::Low);
    store.add_task("B", ColumnId::Backlog, Priority::Low);
    assert!(store.move_task(&a, ColumnId::Backlog));
    assert_eq!(column_ids(&store, ColumnId::Backlog), ["T-1", "T-2"]);
}

// ---------------------------------------------------------------------------
// Progress clamping
// ---------------------------------------------------------------------------

#[test]
fn progress_is_clamped() {
    let mut store = make_store();
    let id = store.add_task("Clamp", ColumnId::InProgress, Priority::Medium);

    store.update_progress(&id, 150);
    assert_eq!(store.get(&id).unwrap().progress, 100);

    store.update_progress(&id, -5);
    assert_eq!(store.get(&id).unwrap().progress, 0);
}

// ---------------------------------------------------------------------------
// Unknown ids
// ---------------------------------------------------------------------------

#[test]
fn unknown_id_operations_are_noops() {
    let mut store = make_store();
    store.add_task("Only", ColumnId::Backlog, Priority::Low);
    let before = store.tasks();
    let ghost = TaskId::new("missing");

    assert!(!store.move_task(&ghost, ColumnId::Done));
    assert!(!store.update_progress(&ghost, 50));
    assert!(!store.delete_task(&ghost));
    assert!(!store.update_task(&ghost, TaskPatch::new().title("x")));

    assert!(Arc::ptr_eq(&before, &store.tasks()));
}

// ---------------------------------------------------------------------------
// Patches
// ---------------------------------------------------------------------------

#[test]
fn patch_changes_only_given_fields() {
    let mut store = make_store();
    let id = store.add_task("Old", ColumnId::Backlog, Priority::Low);
    let before = store.get(&id).unwrap().clone();

    let due = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
    assert!(store.update_task(
        &id,
        TaskPatch::new().title("New").priority(Priority::High).due_date(due),
    ));

    let after = store.get(&id).unwrap();
    assert_eq!(after.title, "New");
    assert_eq!(after.priority, Priority::High);
    assert_eq!(after.due_date, due);
    assert_eq!(after.assignee, before.assignee);
    assert_eq!(after.column_id, before.column_id);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn patch_into_done_does_not_force_progress() {
    let mut store = make_store();
    let id = store.add_task("Patch", ColumnId::Review, Priority::Low);
    store.update_progress(&id, 30);
    store.update_task(&id, TaskPatch::new().column(ColumnId::Done));
    let task = store.get(&id).unwrap();
    assert_eq!(task.column_id, ColumnId::Done);
    assert_eq!(task.progress, 30);
}

// ---------------------------------------------------------------------------
// Ids and seeding
// ---------------------------------------------------------------------------

#[test]
fn deleted_ids_are_never_reissued() {
    let mut store = make_store();
    let first = store.add_task("A", ColumnId::Backlog, Priority::Low);
    store.delete_task(&first);
    let second = store.add_task("B", ColumnId::Backlog, Priority::Low);
    assert_ne!(first, second);
}

#[test]
fn uuid_ids_are_unique() {
    let mut store = TaskStore::new().with_id_generator(UuidIds);
    let a = store.add_task("A", ColumnId::Backlog, Priority::Low);
    let b = store.add_task("B", ColumnId::Backlog, Priority::Low);
    assert_ne!(a, b);
}

#[test]
fn demo_seed_then_add_continues_sequence() {
    let mut store = make_store().with_demo_tasks();
    assert_eq!(store.len(), 8);
    assert_eq!(store.project().counts(), [3, 2, 1, 2]);

    let id = store.add_task("Ninth", ColumnId::Review, Priority::Low);
    assert_eq!(id.as_str(), "T-9");
    assert_eq!(store.project().counts(), [3, 2, 2, 2]);
}

#[test]
fn custom_due_offset() {
    let mut store = make_store().with_due_in_days(14);
    let id = store.add_task("Later", ColumnId::Backlog, Priority::Low);
    assert_eq!(
        store.get(&id).unwrap().due_date,
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    );
}
