//! Theme and styling constants for the TUI.

use kanban_proto::{ColumnId, Priority};
use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for the focused column.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Error color for rejected input.
pub const ERROR: Color = Color::Red;

/// Critical priority (neon pink).
pub const PRIORITY_CRITICAL: Color = Color::Rgb(255, 45, 149);

/// High priority (purple).
pub const PRIORITY_HIGH: Color = Color::Rgb(157, 78, 221);

/// Medium priority (cyan).
pub const PRIORITY_MEDIUM: Color = Color::Rgb(0, 255, 240);

/// Low priority (yellow).
pub const PRIORITY_LOW: Color = Color::Rgb(255, 230, 109);

/// Accent color for a priority.
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Critical => PRIORITY_CRITICAL,
        Priority::High => PRIORITY_HIGH,
        Priority::Medium => PRIORITY_MEDIUM,
        Priority::Low => PRIORITY_LOW,
    }
}

/// Accent color for a column border.
#[must_use]
pub const fn column_color(column: ColumnId) -> Color {
    match column {
        ColumnId::Backlog => PRIORITY_HIGH,
        ColumnId::InProgress => PRIORITY_MEDIUM,
        ColumnId::Review => PRIORITY_LOW,
        ColumnId::Done => PRIORITY_CRITICAL,
    }
}

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (labels, metadata).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Text-mode progress bar, `width` cells wide.
#[must_use]
pub fn progress_bar(progress: u8, width: usize) -> String {
    let filled = usize::from(progress.min(100)) * width / 100;
    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(width - filled))
}
