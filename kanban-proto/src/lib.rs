//! Shared task and column model for the kanban board.

pub mod column;
pub mod task;

pub use column::{COLUMNS, Column};
pub use task::{
    ASSIGNEES, ColumnId, MAX_PROGRESS, MIN_PROGRESS, ParseError, Priority, Task, TaskId, TaskPatch,
    clamp_progress,
};
