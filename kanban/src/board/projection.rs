//! Read-only grouping of tasks by column.

use kanban_proto::{COLUMNS, Column, ColumnId, Task};
use serde::Serialize;

/// The tasks of one column, in store order.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnGroup<'a> {
    /// Column descriptor.
    pub column: &'static Column,
    /// Tasks whose `column_id` matches, in store insertion order.
    pub tasks: Vec<&'a Task>,
}

impl ColumnGroup<'_> {
    /// Number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Tasks partitioned into the four board columns.
///
/// Every task lands in exactly one group; relative order within a group
/// follows the source slice.
#[derive(Debug, Clone, Serialize)]
pub struct BoardProjection<'a> {
    columns: Vec<ColumnGroup<'a>>,
}

impl<'a> BoardProjection<'a> {
    /// Groups `tasks` by column.
    #[must_use]
    pub fn new(tasks: &'a [Task]) -> Self {
        let mut columns: Vec<ColumnGroup<'a>> = COLUMNS
            .iter()
            .map(|column| ColumnGroup {
                column,
                tasks: Vec::new(),
            })
            .collect();
        for task in tasks {
            columns[task.column_id.index()].tasks.push(task);
        }
        Self { columns }
    }

    /// All groups in board order.
    #[must_use]
    pub fn groups(&self) -> &[ColumnGroup<'a>] {
        &self.columns
    }

    /// The group for one column.
    #[must_use]
    pub fn column(&self, column_id: ColumnId) -> &ColumnGroup<'a> {
        &self.columns[column_id.index()]
    }

    /// Task counts per column, in board order.
    #[must_use]
    pub fn counts(&self) -> [usize; 4] {
        ColumnId::ALL.map(|c| self.column(c).len())
    }

    /// Total number of tasks across all columns.
    #[must_use]
    pub fn total(&self) -> usize {
        self.columns.iter().map(ColumnGroup::len).sum()
    }
}

/// Tasks in a single column, in store order.
#[must_use]
pub fn tasks_in(tasks: &[Task], column_id: ColumnId) -> Vec<&Task> {
    tasks.iter().filter(|t| t.column_id == column_id).collect()
}
