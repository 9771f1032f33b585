//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, InputMode};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled("TASK_BOARD", theme::bold()), Span::raw(" | ")];

    match &app.mode {
        InputMode::Normal => spans.push(Span::styled(
            "←→/hl: column | ↑↓/jk: card | HL: move | 1-4: send to | +/-: progress | p: priority | a: add | e: edit | D: due | d: delete | Enter: complete | q: quit",
            theme::dimmed(),
        )),
        InputMode::Adding { title, priority } => {
            spans.push(Span::styled(
                format!("NEW [{priority}] "),
                theme::panel_title(theme::priority_color(*priority)),
            ));
            spans.push(Span::styled(format!("{title}_"), theme::normal()));
            spans.push(Span::styled(
                "  (Tab: priority | Enter: create | Esc: cancel)",
                theme::dimmed(),
            ));
        }
        InputMode::Editing { task_id, title } => {
            spans.push(Span::styled(format!("EDIT {task_id} "), theme::bold()));
            spans.push(Span::styled(format!("{title}_"), theme::normal()));
            spans.push(Span::styled("  (Enter: save | Esc: cancel)", theme::dimmed()));
        }
        InputMode::EditingDue { task_id, text } => {
            spans.push(Span::styled(format!("DUE {task_id} "), theme::bold()));
            spans.push(Span::styled(format!("{text}_"), theme::normal()));
            spans.push(Span::styled(
                "  (YYYY-MM-DD | Enter: save | Esc: cancel)",
                theme::dimmed(),
            ));
        }
    }

    if let Some(status) = &app.status {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(status.clone(), theme::normal().fg(theme::ERROR)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
