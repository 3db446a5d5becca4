use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::app::core::TableViewState;
use crate::ui::colors;

/// Read-only three-column table with headings and a movable row highlight.
pub fn render(f: &mut Frame, area: Rect, table: &TableViewState, focused: bool) {
    let palette = colors::current();
    let block_style = if focused {
        palette.block_focus_style
    } else {
        palette.block_style
    };

    let header = Row::new(table.columns.iter().map(|c| Cell::from(*c)))
        .style(palette.table_header_style);

    let rows = table.rows.iter().map(|(id, name, course)| {
        Row::new(vec![
            Cell::from(id.to_string()),
            Cell::from(*name),
            Cell::from(*course),
        ])
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(48),
        Constraint::Percentage(48),
    ];
    let view = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).style(block_style))
        .row_highlight_style(palette.selected_style);

    let mut state = TableState::default();
    state.select(table.selected);
    f.render_stateful_widget(view, area, &mut state);
}
