//! Task store: the authoritative, ordered task collection and its mutations.
//!
//! `TaskStore` owns the board's task list as an immutable shared slice.
//! Every effective mutation swaps in a new slice; a no-op (unknown id)
//! keeps the previous allocation, so observers can detect change with
//! [`Arc::ptr_eq`].

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Days;
use kanban_proto::{ColumnId, MAX_PROGRESS, Priority, Task, TaskId, TaskPatch, clamp_progress};
use uuid::Uuid;

use super::generate::{
    AssigneePicker, Clock, IdGenerator, RandomRoster, SequentialIds, SystemClock,
};
use super::projection::BoardProjection;
use super::seed;

/// One immutable value of the store's task list.
pub type TaskList = Arc<[Task]>;

/// Default number of days between creation and the due date.
pub const DEFAULT_DUE_IN_DAYS: u32 = 7;

/// Generator candidates tried before falling back to a UUID.
const MAX_ID_ATTEMPTS: usize = 64;

/// Holds the board's tasks in insertion order and applies mutations.
///
/// Unknown task ids are never an error: move, delete, and update simply
/// report `false` and leave the list untouched.
pub struct TaskStore {
    /// Current task list.
    tasks: TaskList,
    /// Every id this store has ever held, including deleted ones.
    issued: HashSet<TaskId>,
    ids: Box<dyn IdGenerator>,
    assignees: Box<dyn AssigneePicker>,
    clock: Box<dyn Clock>,
    due_in_days: u32,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store with sequential ids, a random roster
    /// assignee, the system clock, and a 7-day due date.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Arc::from(Vec::new()),
            issued: HashSet::new(),
            ids: Box::new(SequentialIds::default()),
            assignees: Box::new(RandomRoster::default()),
            clock: Box::new(SystemClock),
            due_in_days: DEFAULT_DUE_IN_DAYS,
        }
    }

    /// Replaces the id generator.
    #[must_use]
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Replaces the assignee picker.
    #[must_use]
    pub fn with_assignee_picker(mut self, picker: impl AssigneePicker + 'static) -> Self {
        self.assignees = Box::new(picker);
        self
    }

    /// Replaces the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Sets how many days ahead new tasks are due.
    #[must_use]
    pub fn with_due_in_days(mut self, days: u32) -> Self {
        self.due_in_days = days;
        self
    }

    /// Replaces the collection with `tasks`, keeping their order.
    ///
    /// Tasks whose id already appeared earlier in `tasks` are dropped.
    #[must_use]
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        let mut kept = Vec::with_capacity(tasks.len());
        let mut seen = HashSet::new();
        for task in tasks {
            if seen.insert(task.id.clone()) {
                kept.push(task);
            } else {
                tracing::warn!(task_id = %task.id, "dropping task with duplicate id");
            }
        }
        self.issued.extend(seen);
        self.tasks = Arc::from(kept);
        self
    }

    /// Seeds the store with the demo board, drawing ids from the
    /// configured generator so later tasks continue the sequence.
    #[must_use]
    pub fn with_demo_tasks(mut self) -> Self {
        let tasks = seed::demo_tasks(self.ids.as_mut(), self.clock.as_ref());
        self.with_tasks(tasks)
    }

    /// Returns the current task list.
    #[must_use]
    pub fn tasks(&self) -> TaskList {
        Arc::clone(&self.tasks)
    }

    /// Borrows the current task list.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == task_id)
    }

    /// Number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Groups the current tasks by column.
    #[must_use]
    pub fn project(&self) -> BoardProjection<'_> {
        BoardProjection::new(&self.tasks)
    }

    /// Appends a new task and returns its id.
    ///
    /// The caller is expected to have trimmed and validated `title`.
    /// Progress starts at 0 and the due date is `due_in_days` after today
    /// (UTC).
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        column_id: ColumnId,
        priority: Priority,
    ) -> TaskId {
        let now = self.clock.now();
        let today = now.date_naive();
        let due_date = today
            .checked_add_days(Days::new(u64::from(self.due_in_days)))
            .unwrap_or(today);

        let task = Task {
            id: self.fresh_id(),
            title: title.into(),
            priority,
            due_date,
            assignee: self.assignees.pick(),
            progress: 0,
            column_id,
            created_at: u64::try_from(now.timestamp_millis()).unwrap_or(0),
        };
        let id = task.id.clone();

        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.extend_from_slice(&self.tasks);
        tasks.push(task);
        self.tasks = Arc::from(tasks);

        tracing::debug!(task_id = %id, column = %column_id, %priority, "task added");
        id
    }

    /// Moves a task to `target`. Entering [`ColumnId::Done`] forces
    /// progress to 100; other moves leave progress alone.
    ///
    /// Returns `false` (and changes nothing) if the id is unknown.
    pub fn move_task(&mut self, task_id: &TaskId, target: ColumnId) -> bool {
        let moved = self.modify(task_id, |task| {
            task.column_id = target;
            if target == ColumnId::Done {
                task.progress = MAX_PROGRESS;
            }
        });
        if moved {
            tracing::debug!(task_id = %task_id, column = %target, "task moved");
        }
        moved
    }

    /// Removes a task.
    ///
    /// Returns `false` (and changes nothing) if the id is unknown.
    pub fn delete_task(&mut self, task_id: &TaskId) -> bool {
        let Some(position) = self.position(task_id) else {
            return false;
        };
        let mut tasks = self.tasks.to_vec();
        tasks.remove(position);
        self.tasks = Arc::from(tasks);
        tracing::debug!(task_id = %task_id, "task deleted");
        true
    }

    /// Sets a task's progress, clamped to `[0, 100]`.
    ///
    /// Returns `false` (and changes nothing) if the id is unknown.
    pub fn update_progress(&mut self, task_id: &TaskId, progress: i64) -> bool {
        let progress = clamp_progress(progress);
        let updated = self.modify(task_id, |task| task.progress = progress);
        if updated {
            tracing::debug!(task_id = %task_id, progress, "task progress updated");
        }
        updated
    }

    /// Applies a partial update to a task.
    ///
    /// Only the fields present in `patch` change. Setting the column to
    /// [`ColumnId::Done`] here does not force progress to 100; use
    /// [`move_task`](Self::move_task) for that.
    ///
    /// Returns `false` (and changes nothing) if the id is unknown.
    pub fn update_task(&mut self, task_id: &TaskId, patch: TaskPatch) -> bool {
        let mut left_incomplete = false;
        let updated = self.modify(task_id, |task| {
            task.apply_patch(patch);
            left_incomplete = task.column_id == ColumnId::Done && task.progress < MAX_PROGRESS;
        });
        if updated {
            tracing::debug!(task_id = %task_id, "task updated");
            if left_incomplete {
                tracing::warn!(
                    task_id = %task_id,
                    "task is in done with progress below 100; patches do not normalize progress"
                );
            }
        }
        updated
    }

    fn position(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == task_id)
    }

    /// Copies the list with one task edited in place; no-op if absent.
    fn modify(&mut self, task_id: &TaskId, edit: impl FnOnce(&mut Task)) -> bool {
        let Some(position) = self.position(task_id) else {
            return false;
        };
        let mut tasks = self.tasks.to_vec();
        edit(&mut tasks[position]);
        self.tasks = Arc::from(tasks);
        true
    }

    /// Draws an id never held by this store before.
    fn fresh_id(&mut self) -> TaskId {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
            tracing::warn!(task_id = %candidate, "id generator repeated an issued id");
        }
        loop {
            let candidate = TaskId::new(Uuid::now_v7().to_string());
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
