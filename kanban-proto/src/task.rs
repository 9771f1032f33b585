//! Task model for the kanban board.
//!
//! Defines the task entity, its closed enumerations (priority and workflow
//! column), the identifier newtype, and the [`TaskPatch`] partial-update
//! value used by task editing.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::column::{COLUMNS, Column};

/// Lowest storable progress value.
pub const MIN_PROGRESS: u8 = 0;

/// Highest storable progress value.
pub const MAX_PROGRESS: u8 = 100;

/// Fixed roster of assignee labels used for system-generated tasks.
pub const ASSIGNEES: [&str; 5] = ["AX", "KZ", "NV", "RY", "QT"];

/// Errors produced when parsing textual enum values at an input boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The text does not name one of the four board columns.
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    /// The text does not name one of the four priorities.
    #[error("unknown priority: {0}")]
    UnknownPriority(String),
}

/// Opaque task identifier, unique for the lifetime of a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Must be handled immediately.
    Critical,
    /// Important, next in line.
    High,
    /// Default priority for new tasks.
    #[default]
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// All priorities, most urgent first.
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Returns the snake_case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Returns the next priority in [`Priority::ALL`], wrapping around.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Critical => Self::High,
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::Critical,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseError::UnknownPriority(s.to_string()))
    }
}

/// Workflow stage a task currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnId {
    /// Not started.
    Backlog,
    /// Being worked on.
    InProgress,
    /// Awaiting review.
    Review,
    /// Finished. Entering this column via a move forces progress to 100.
    Done,
}

impl ColumnId {
    /// All columns in board order.
    pub const ALL: [Self; 4] = [Self::Backlog, Self::InProgress, Self::Review, Self::Done];

    /// Returns the snake_case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Position of this column on the board (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Backlog => 0,
            Self::InProgress => 1,
            Self::Review => 2,
            Self::Done => 3,
        }
    }

    /// Column at the given board position, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Backlog),
            1 => Some(Self::InProgress),
            2 => Some(Self::Review),
            3 => Some(Self::Done),
            _ => None,
        }
    }

    /// Column to the left, or `None` at the first column.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        match self.index() {
            0 => None,
            i => Self::from_index(i - 1),
        }
    }

    /// Column to the right, or `None` at the last column.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Static descriptor for this column.
    #[must_use]
    pub fn descriptor(self) -> &'static Column {
        &COLUMNS[self.index()]
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseError::UnknownColumn(s.to_string()))
    }
}

/// Clamps an arbitrary progress value into `[0, 100]`.
#[must_use]
pub fn clamp_progress(value: i64) -> u8 {
    u8::try_from(value.clamp(i64::from(MIN_PROGRESS), i64::from(MAX_PROGRESS)))
        .unwrap_or(MAX_PROGRESS)
}

/// A unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, immutable identifier.
    pub id: TaskId,
    /// Display title (non-empty after trimming when created through the UI).
    pub title: String,
    /// Urgency.
    pub priority: Priority,
    /// Calendar due date, serialized as `YYYY-MM-DD`.
    pub due_date: NaiveDate,
    /// Short label of the responsible party.
    pub assignee: String,
    /// Completion percentage in `[0, 100]`.
    pub progress: u8,
    /// Current workflow column.
    pub column_id: ColumnId,
    /// Creation time in milliseconds since the Unix epoch. Never mutated.
    pub created_at: u64,
}

impl Task {
    /// Applies every field present in `patch`, leaving the rest untouched.
    ///
    /// Progress is clamped. The column is assigned as-is: unlike a move,
    /// patching the column to [`ColumnId::Done`] does not force progress.
    pub fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
        if let Some(progress) = patch.progress {
            self.progress = clamp_progress(progress);
        }
        if let Some(column_id) = patch.column_id {
            self.column_id = column_id;
        }
    }
}

/// Sparse set of field overrides for an existing task.
///
/// `id` and `created_at` have no counterpart here and cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New title.
    pub title: Option<String>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New due date.
    pub due_date: Option<NaiveDate>,
    /// New assignee label.
    pub assignee: Option<String>,
    /// New progress, clamped to `[0, 100]` on apply.
    pub progress: Option<i64>,
    /// New column (no progress normalization).
    pub column_id: Option<ColumnId>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title override.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the priority override.
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date override.
    #[must_use]
    pub const fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee override.
    #[must_use]
    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the progress override.
    #[must_use]
    pub const fn progress(mut self, progress: i64) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Sets the column override.
    #[must_use]
    pub const fn column(mut self, column_id: ColumnId) -> Self {
        self.column_id = Some(column_id);
        self
    }

    /// Returns `true` if the patch overrides nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.assignee.is_none()
            && self.progress.is_none()
            && self.column_id.is_none()
    }
}
