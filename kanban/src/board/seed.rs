//! Demo board contents.

use chrono::{NaiveDate, TimeDelta};
use kanban_proto::{ColumnId, Priority, Task};

use super::generate::{Clock, IdGenerator};

/// One demo task: title, priority, due date, assignee, progress, column,
/// and age in days.
type DemoRow = (&'static str, Priority, (i32, u32, u32), &'static str, u8, ColumnId, i64);

const DEMO_ROWS: [DemoRow; 8] = [
    (
        "Initialize neural interface protocol",
        Priority::Critical,
        (2026, 3, 1),
        "AX",
        45,
        ColumnId::Backlog,
        5,
    ),
    (
        "Debug quantum encryption module",
        Priority::High,
        (2026, 3, 5),
        "KZ",
        72,
        ColumnId::InProgress,
        3,
    ),
    (
        "Deploy holographic UI layer",
        Priority::Medium,
        (2026, 3, 10),
        "NV",
        20,
        ColumnId::Backlog,
        2,
    ),
    (
        "Calibrate synaptic feedback loop",
        Priority::Low,
        (2026, 3, 15),
        "RY",
        88,
        ColumnId::Review,
        1,
    ),
    (
        "Patch memory leak in cortex driver",
        Priority::Critical,
        (2026, 2, 28),
        "QT",
        100,
        ColumnId::Done,
        7,
    ),
    (
        "Optimize datastream compression",
        Priority::High,
        (2026, 3, 8),
        "AX",
        55,
        ColumnId::InProgress,
        4,
    ),
    (
        "Integrate biometric auth scanner",
        Priority::Medium,
        (2026, 3, 12),
        "KZ",
        10,
        ColumnId::Backlog,
        1,
    ),
    (
        "Refactor nanobot control API",
        Priority::High,
        (2026, 3, 3),
        "NV",
        100,
        ColumnId::Done,
        6,
    ),
];

/// Builds the eight demo tasks, taking ids from `ids` and back-dating
/// `created_at` relative to `clock`.
pub fn demo_tasks(ids: &mut dyn IdGenerator, clock: &dyn Clock) -> Vec<Task> {
    let now = clock.now();
    DEMO_ROWS
        .iter()
        .map(
            |&(title, priority, (y, m, d), assignee, progress, column_id, age_days)| {
                let created = now - TimeDelta::days(age_days);
                Task {
                    id: ids.next_id(),
                    title: title.to_string(),
                    priority,
                    due_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
                    assignee: assignee.to_string(),
                    progress,
                    column_id,
                    created_at: u64::try_from(created.timestamp_millis()).unwrap_or(0),
                }
            },
        )
        .collect()
}
