//! Integration tests for the TUI state machine: key presses driving the
//! store and the selection, plus rendering into a test backend.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use chrono::{DateTime, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kanban::app::{App, InputMode};
use kanban::board::{FixedClock, RoundRobin, TaskStore};
use kanban::ui;
use kanban_proto::{ColumnId, Priority};
use ratatui::{Terminal, backend::TestBackend};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn demo_app() -> App {
    let store = TaskStore::new()
        .with_assignee_picker(RoundRobin::new(Vec::new()))
        .with_clock(FixedClock(DateTime::from_timestamp(1_772_323_200, 0).unwrap()))
        .with_demo_tasks();
    App::new(store)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Renders the app into an in-memory terminal and returns the screen text.
fn render(app: &App) -> String {
    render_sized(app, 200, 40)
}

fn render_sized(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

#[test]
fn add_then_walk_task_to_done() {
    let mut app = demo_app();

    press(&mut app, KeyCode::Char('a'));
    for _ in 0..3 {
        press(&mut app, KeyCode::Tab); // medium -> low -> critical -> high
    }
    type_text(&mut app, "Wire up telemetry");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, InputMode::Normal);
    let task = app.selected_task().unwrap().clone();
    assert_eq!(task.title, "Wire up telemetry");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.column_id, ColumnId::Backlog);
    assert_eq!(task.progress, 0);

    press(&mut app, KeyCode::Char('L'));
    press(&mut app, KeyCode::Char('L'));
    assert_eq!(app.selected_column, ColumnId::Review);
    assert_eq!(app.selected_task().unwrap().id, task.id);

    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.selected_column, ColumnId::Done);
    let done = app.store().get(&task.id).unwrap();
    assert_eq!(done.progress, 100);

    press(&mut app, KeyCode::Enter);
    assert!(app.store().get(&task.id).is_none());
    assert_eq!(
        app.status.as_deref(),
        Some("COMPLETE \u{2713} Wire up telemetry")
    );
}

#[test]
fn blank_title_is_rejected_and_stays_in_add_mode() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(matches!(app.mode, InputMode::Adding { .. }));
    assert!(app.status.is_some());
    assert_eq!(app.store().len(), 8);
}

#[test]
fn editing_renames_selected_task() {
    let mut app = demo_app();
    let id = app.selected_task().unwrap().id.clone();

    press(&mut app, KeyCode::Char('e'));
    for _ in 0..100 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "Renamed");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store().get(&id).unwrap().title, "Renamed");
}

#[test]
fn due_date_edit_applies_typed_date() {
    let mut app = demo_app();
    let id = app.selected_task().unwrap().id.clone();
    let before = app.store().get(&id).unwrap().clone();

    press(&mut app, KeyCode::Char('D'));
    for _ in 0..10 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "2026-04-15");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, InputMode::Normal);
    let after = app.store().get(&id).unwrap();
    assert_eq!(after.due_date, NaiveDate::from_ymd_opt(2026, 4, 15).unwrap());
    assert_eq!(after.title, before.title);
    assert_eq!(after.progress, before.progress);
    assert_eq!(after.column_id, before.column_id);
}

#[test]
fn invalid_due_date_is_rejected_and_keeps_editing() {
    let mut app = demo_app();
    let id = app.selected_task().unwrap().id.clone();
    let before = app.store().get(&id).unwrap().due_date;

    press(&mut app, KeyCode::Char('D'));
    for _ in 0..10 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "next friday");
    press(&mut app, KeyCode::Enter);

    assert!(matches!(app.mode, InputMode::EditingDue { .. }));
    assert!(app.status.as_deref().unwrap().contains("invalid due date"));
    assert_eq!(app.store().get(&id).unwrap().due_date, before);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, InputMode::Normal);
    assert_eq!(app.store().get(&id).unwrap().due_date, before);
}

#[test]
fn progress_keys_step_and_clamp() {
    let mut app = demo_app().with_progress_step(30);
    let id = app.selected_task().unwrap().id.clone();
    let start = app.store().get(&id).unwrap().progress; // 45

    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.store().get(&id).unwrap().progress, start + 30);
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.store().get(&id).unwrap().progress, 100);
    for _ in 0..5 {
        press(&mut app, KeyCode::Char('-'));
    }
    assert_eq!(app.store().get(&id).unwrap().progress, 0);
}

#[test]
fn delete_keeps_selection_in_range() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('l')); // in progress: 2 tasks
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.selected_row, 1);

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.selected_row, 0);
    press(&mut app, KeyCode::Char('d'));
    assert!(app.selected_task().is_none());
    assert_eq!(app.projection().counts(), [3, 0, 1, 2]);
}

#[test]
fn ctrl_c_quits_from_add_mode() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('a'));
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn board_renders_all_columns_with_counts() {
    let app = demo_app();
    let screen = render(&app);
    assert!(screen.contains("BACKLOG [3]"));
    assert!(screen.contains("IN_PROG [2]"));
    assert!(screen.contains("REVIEW [1]"));
    assert!(screen.contains("DONE [2]"));
    assert!(screen.contains("Initialize neural interface protocol"));
}

#[test]
fn status_bar_shows_input_while_adding() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Draft");
    let screen = render(&app);
    assert!(screen.contains("Draft_"));
}

#[test]
fn status_bar_shows_due_prompt() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('D'));
    let screen = render(&app);
    assert!(screen.contains("2026-03-01_"));
}

#[test]
fn tall_column_scrolls_to_selection() {
    let mut store = TaskStore::new();
    for n in 1..=6 {
        store.add_task(format!("Card {n}"), ColumnId::Backlog, Priority::Low);
    }
    let mut app = App::new(store);
    for _ in 0..5 {
        press(&mut app, KeyCode::Char('j'));
    }
    assert_eq!(app.selected_task().unwrap().title, "Card 6");

    // Room for three three-line cards per column.
    let screen = render_sized(&app, 120, 12);
    assert!(screen.contains("Card 6"));
    assert!(!screen.contains("Card 1"));
}

#[test]
fn empty_board_renders() {
    let app = App::new(TaskStore::new());
    let screen = render(&app);
    assert!(screen.contains("BACKLOG [0]"));
    assert!(screen.contains("DONE [0]"));
}
