//! Thread-safe store wrapper with change notification.
//!
//! [`SharedStore`] serializes mutations behind a mutex, so each operation
//! is applied whole before the next begins, and publishes every new task
//! list on a `watch` channel. No-op operations publish nothing.

use kanban_proto::{ColumnId, Priority, TaskId, TaskPatch};
use parking_lot::Mutex;
use tokio::sync::watch;

use super::store::{TaskList, TaskStore};

/// A [`TaskStore`] that can be shared across threads and observed.
pub struct SharedStore {
    store: Mutex<TaskStore>,
    tx: watch::Sender<TaskList>,
}

impl SharedStore {
    /// Wraps `store`, publishing its current list as the initial value.
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        let (tx, _rx) = watch::channel(store.tasks());
        Self {
            store: Mutex::new(store),
            tx,
        }
    }

    /// Returns a receiver that observes every published task list.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TaskList> {
        self.tx.subscribe()
    }

    /// Returns the current task list.
    #[must_use]
    pub fn snapshot(&self) -> TaskList {
        self.store.lock().tasks()
    }

    /// Runs `f` against the store under the lock, for reads.
    pub fn read<R>(&self, f: impl FnOnce(&TaskStore) -> R) -> R {
        f(&self.store.lock())
    }

    /// See [`TaskStore::add_task`].
    pub fn add_task(
        &self,
        title: impl Into<String>,
        column_id: ColumnId,
        priority: Priority,
    ) -> TaskId {
        let mut store = self.store.lock();
        let id = store.add_task(title, column_id, priority);
        self.tx.send_replace(store.tasks());
        id
    }

    /// See [`TaskStore::move_task`].
    pub fn move_task(&self, task_id: &TaskId, target: ColumnId) -> bool {
        self.mutate(|store| store.move_task(task_id, target))
    }

    /// See [`TaskStore::delete_task`].
    pub fn delete_task(&self, task_id: &TaskId) -> bool {
        self.mutate(|store| store.delete_task(task_id))
    }

    /// See [`TaskStore::update_progress`].
    pub fn update_progress(&self, task_id: &TaskId, progress: i64) -> bool {
        self.mutate(|store| store.update_progress(task_id, progress))
    }

    /// See [`TaskStore::update_task`].
    pub fn update_task(&self, task_id: &TaskId, patch: TaskPatch) -> bool {
        self.mutate(|store| store.update_task(task_id, patch))
    }

    /// Applies `op` and publishes the result if it changed anything.
    ///
    /// The lock is held while publishing so subscribers see lists in
    /// mutation order.
    fn mutate(&self, op: impl FnOnce(&mut TaskStore) -> bool) -> bool {
        let mut store = self.store.lock();
        let changed = op(&mut store);
        if changed {
            self.tx.send_replace(store.tasks());
        }
        changed
    }
}
