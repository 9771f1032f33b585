//! Terminal UI rendering.

pub mod column;
pub mod status_bar;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Create main layout with status bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let board_area = main_chunks[0];
    let status_area = main_chunks[1];

    // One equal-width panel per column
    let column_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(board_area);

    let projection = app.projection();
    for (group, area) in projection.groups().iter().zip(column_chunks.iter()) {
        let selected = (group.column.id == app.selected_column).then_some(app.selected_row);
        column::render(frame, *area, group, selected);
    }

    status_bar::render(frame, status_area, app);
}
