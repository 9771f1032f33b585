//! Board column rendering.

use kanban_proto::Task;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::theme;
use crate::board::ColumnGroup;

/// Width of the progress bar inside a card.
const PROGRESS_WIDTH: usize = 10;

/// Render one column of cards. `selected` is the highlighted row when the
/// column has focus.
pub fn render(frame: &mut Frame, area: Rect, group: &ColumnGroup<'_>, selected: Option<usize>) {
    let accent = theme::column_color(group.column.id);
    let items: Vec<ListItem> = group.tasks.iter().map(|task| card(task)).collect();

    let title = Line::from(vec![
        Span::styled(group.column.title, theme::panel_title(accent)),
        Span::styled(format!(" [{}]", group.len()), theme::bold()),
        Span::styled(format!(" {}", group.column.label), theme::dimmed()),
    ]);
    let border_style = if selected.is_some() {
        theme::panel_title(theme::HIGHLIGHT)
    } else {
        theme::normal().fg(accent)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    // The list scrolls to keep the selected card in view.
    let list = List::new(items)
        .block(block)
        .highlight_style(theme::selected());
    let mut state = ListState::default().with_selected(selected.filter(|_| !group.is_empty()));
    frame.render_stateful_widget(list, area, &mut state);
}

/// A three-line card: title, metadata, progress.
fn card(task: &Task) -> ListItem<'static> {
    let color = theme::priority_color(task.priority);
    let lines = vec![
        Line::from(vec![
            Span::styled("\u{258c} ", theme::normal().fg(color)),
            Span::styled(task.title.clone(), theme::bold()),
        ]),
        Line::from(vec![
            Span::styled(format!("  {}", task.priority), theme::normal().fg(color)),
            Span::styled(
                format!("  @{}  due {}", task.assignee, task.due_date),
                theme::dimmed(),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(theme::progress_bar(task.progress, PROGRESS_WIDTH), theme::normal().fg(color)),
            Span::styled(format!(" {}%", task.progress), theme::dimmed()),
        ]),
    ];
    ListItem::new(lines)
}
