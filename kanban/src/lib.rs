//! Kanban: terminal task board.
//!
//! The [`board`] module owns the task store and its column projection,
//! [`app`] holds the TUI state machine, and [`ui`] renders it.

pub mod app;
pub mod board;
pub mod config;
pub mod ui;
