//! Static column descriptors for the board.

use serde::Serialize;

use crate::task::ColumnId;

/// Display descriptor for one workflow column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Column identifier.
    pub id: ColumnId,
    /// Heading shown above the column.
    pub title: &'static str,
    /// Secondary label shown under the heading.
    pub label: &'static str,
}

/// The fixed set of board columns, in board order.
pub static COLUMNS: [Column; 4] = [
    Column {
        id: ColumnId::Backlog,
        title: "BACKLOG",
        label: "BCK_LOG",
    },
    Column {
        id: ColumnId::InProgress,
        title: "IN_PROG",
        label: "IN_PROGRESS",
    },
    Column {
        id: ColumnId::Review,
        title: "REVIEW",
        label: "CODE_REV",
    },
    Column {
        id: ColumnId::Done,
        title: "DONE",
        label: "COMPLETE",
    },
];
