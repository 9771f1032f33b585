//! Application state and event handling.
//!
//! `App` is the board's input-collecting collaborator: it turns key presses
//! into store operations, validates titles before they reach the store, and
//! tracks which card is selected.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kanban_proto::{ColumnId, Priority, Task, TaskId, TaskPatch};
use thiserror::Error;

use crate::board::{BoardProjection, TaskStore, tasks_in};

/// Default maximum title length in characters.
pub const DEFAULT_MAX_TITLE_LEN: usize = 256;

/// Default progress change per `+`/`-` key press.
pub const DEFAULT_PROGRESS_STEP: i64 = 10;

/// Text form of a due date in the edit prompt.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Title validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TitleError {
    /// Title is empty or whitespace only.
    #[error("task title cannot be empty")]
    Empty,
    /// Title exceeds the configured maximum length.
    #[error("task title too long (max {max} characters)")]
    TooLong {
        /// Maximum allowed characters.
        max: usize,
    },
}

/// Trims `raw` and checks it is non-empty and at most `max_len` characters.
///
/// # Errors
///
/// Returns [`TitleError::Empty`] for blank input and
/// [`TitleError::TooLong`] if the trimmed title is too long.
pub fn validate_title(raw: &str, max_len: usize) -> Result<String, TitleError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TitleError::Empty);
    }
    if trimmed.chars().count() > max_len {
        return Err(TitleError::TooLong { max: max_len });
    }
    Ok(trimmed.to_string())
}

/// Due date parse failure.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid due date {input:?} (expected YYYY-MM-DD)")]
pub struct DueDateError {
    /// Text as typed.
    pub input: String,
    /// Underlying chrono parse error.
    #[source]
    pub source: chrono::ParseError,
}

/// Parses a `YYYY-MM-DD` due date, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`DueDateError`] if `raw` is not a valid calendar date.
pub fn parse_due_date(raw: &str) -> Result<NaiveDate, DueDateError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT).map_err(|source| DueDateError {
        input: trimmed.to_string(),
        source,
    })
}

/// What keyboard input currently means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Navigating and acting on cards.
    Normal,
    /// Typing the title of a new card for the selected column.
    Adding {
        /// Title typed so far.
        title: String,
        /// Priority the card will be created with.
        priority: Priority,
    },
    /// Retitling an existing card.
    Editing {
        /// Card being edited.
        task_id: TaskId,
        /// Title typed so far.
        title: String,
    },
    /// Changing the due date of an existing card.
    EditingDue {
        /// Card being edited.
        task_id: TaskId,
        /// Date text typed so far.
        text: String,
    },
}

/// Main application state.
pub struct App {
    store: TaskStore,
    /// Column holding the selection.
    pub selected_column: ColumnId,
    /// Row of the selected card within its column.
    pub selected_row: usize,
    /// Current input mode.
    pub mode: InputMode,
    /// One-shot message for the status bar, cleared on the next key press.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    max_title_len: usize,
    progress_step: i64,
}

impl App {
    /// Creates an app driving `store`, with the backlog selected.
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            selected_column: ColumnId::Backlog,
            selected_row: 0,
            mode: InputMode::Normal,
            status: None,
            should_quit: false,
            max_title_len: DEFAULT_MAX_TITLE_LEN,
            progress_step: DEFAULT_PROGRESS_STEP,
        }
    }

    /// Set the maximum title length (builder pattern).
    #[must_use]
    pub fn with_max_title_len(mut self, max: usize) -> Self {
        self.max_title_len = max;
        self
    }

    /// Set the progress step for `+`/`-` (builder pattern).
    #[must_use]
    pub fn with_progress_step(mut self, step: i64) -> Self {
        self.progress_step = step;
        self
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// The board grouped by column.
    #[must_use]
    pub fn projection(&self) -> BoardProjection<'_> {
        self.store.project()
    }

    /// The currently selected card, if its column is non-empty.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        tasks_in(self.store.as_slice(), self.selected_column)
            .get(self.selected_row)
            .copied()
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        self.status = None;

        match self.mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Adding { .. } => self.handle_adding_key(key),
            InputMode::Editing { .. } => self.handle_editing_key(key),
            InputMode::EditingDue { .. } => self.handle_due_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left if shift => self.shift_selected(ColumnId::prev),
            KeyCode::Right if shift => self.shift_selected(ColumnId::next),
            KeyCode::Char('H') => self.shift_selected(ColumnId::prev),
            KeyCode::Char('L') => self.shift_selected(ColumnId::next),
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(column) = self.selected_column.prev() {
                    self.select_column(column);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(column) = self.selected_column.next() {
                    self.select_column(column);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_row + 1 < self.column_len(self.selected_column) {
                    self.selected_row += 1;
                }
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(target) = ColumnId::from_index(index) {
                    self.move_selected(target);
                }
            }
            KeyCode::Char('+' | '=') => self.nudge_progress(self.progress_step),
            KeyCode::Char('-') => self.nudge_progress(-self.progress_step),
            KeyCode::Char('p') => self.cycle_priority(),
            KeyCode::Char('a') => {
                self.mode = InputMode::Adding {
                    title: String::new(),
                    priority: Priority::default(),
                };
            }
            KeyCode::Char('e') => {
                let editing = self.selected_task().map(|task| InputMode::Editing {
                    task_id: task.id.clone(),
                    title: task.title.clone(),
                });
                if let Some(mode) = editing {
                    self.mode = mode;
                }
            }
            KeyCode::Char('D') => {
                let editing = self.selected_task().map(|task| InputMode::EditingDue {
                    task_id: task.id.clone(),
                    text: task.due_date.format(DUE_DATE_FORMAT).to_string(),
                });
                if let Some(mode) = editing {
                    self.mode = mode;
                }
            }
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Enter | KeyCode::Char('x') if self.selected_column == ColumnId::Done => {
                self.complete_selected();
            }
            _ => {}
        }
    }

    fn handle_adding_key(&mut self, key: KeyEvent) {
        let InputMode::Adding { title, priority } = &mut self.mode else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Tab => *priority = priority.cycle(),
            KeyCode::Backspace => {
                title.pop();
            }
            KeyCode::Char(c) => title.push(c),
            KeyCode::Enter => match validate_title(title, self.max_title_len) {
                Ok(valid) => {
                    let priority = *priority;
                    let column = self.selected_column;
                    let id = self.store.add_task(valid, column, priority);
                    self.mode = InputMode::Normal;
                    self.select_task(&id);
                    self.status = Some(format!("Added {id}"));
                }
                Err(e) => self.status = Some(e.to_string()),
            },
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        let InputMode::Editing { task_id, title } = &mut self.mode else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Backspace => {
                title.pop();
            }
            KeyCode::Char(c) => title.push(c),
            KeyCode::Enter => match validate_title(title, self.max_title_len) {
                Ok(valid) => {
                    let task_id = task_id.clone();
                    self.store.update_task(&task_id, TaskPatch::new().title(valid));
                    self.mode = InputMode::Normal;
                }
                Err(e) => self.status = Some(e.to_string()),
            },
            _ => {}
        }
    }

    fn handle_due_key(&mut self, key: KeyEvent) {
        let InputMode::EditingDue { task_id, text } = &mut self.mode else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Char(c) => text.push(c),
            KeyCode::Enter => match parse_due_date(text) {
                Ok(due_date) => {
                    let task_id = task_id.clone();
                    self.store
                        .update_task(&task_id, TaskPatch::new().due_date(due_date));
                    self.mode = InputMode::Normal;
                }
                Err(e) => self.status = Some(e.to_string()),
            },
            _ => {}
        }
    }

    fn column_len(&self, column: ColumnId) -> usize {
        tasks_in(self.store.as_slice(), column).len()
    }

    fn select_column(&mut self, column: ColumnId) {
        self.selected_column = column;
        self.clamp_selection();
    }

    /// Points the selection at `task_id`, wherever it now lives.
    fn select_task(&mut self, task_id: &TaskId) {
        let Some(column) = self.store.get(task_id).map(|t| t.column_id) else {
            self.clamp_selection();
            return;
        };
        self.selected_column = column;
        self.selected_row = tasks_in(self.store.as_slice(), column)
            .iter()
            .position(|t| &t.id == task_id)
            .unwrap_or(0);
    }

    const fn clamp_selection_to(&mut self, len: usize) {
        if self.selected_row >= len {
            self.selected_row = len.saturating_sub(1);
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.column_len(self.selected_column);
        self.clamp_selection_to(len);
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id.clone())
    }

    fn shift_selected(&mut self, neighbour: fn(ColumnId) -> Option<ColumnId>) {
        if let Some(target) = neighbour(self.selected_column) {
            self.move_selected(target);
        }
    }

    fn move_selected(&mut self, target: ColumnId) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.store.move_task(&id, target) {
            self.select_task(&id);
        }
    }

    fn nudge_progress(&mut self, delta: i64) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let id = task.id.clone();
        let progress = i64::from(task.progress) + delta;
        self.store.update_progress(&id, progress);
    }

    fn cycle_priority(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let id = task.id.clone();
        let priority = task.priority.cycle();
        self.store.update_task(&id, TaskPatch::new().priority(priority));
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.delete_task(&id);
            self.clamp_selection();
        }
    }

    /// Deletes the selected done card and leaves an acknowledgment in the
    /// status bar. The deletion takes effect immediately.
    fn complete_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let id = task.id.clone();
        let title = task.title.clone();
        self.store.delete_task(&id);
        self.clamp_selection();
        self.status = Some(format!("COMPLETE \u{2713} {title}"));
    }
}
