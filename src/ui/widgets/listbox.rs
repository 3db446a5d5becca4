use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::app::core::ListBoxState;
use crate::ui::colors;

/// Single-selection list over the fixed entries.
pub fn render(f: &mut Frame, area: Rect, listbox: &ListBoxState, focused: bool) {
    let palette = colors::current();
    let block_style = if focused {
        palette.block_focus_style
    } else {
        palette.block_style
    };

    let items: Vec<ListItem> = listbox.items.iter().map(|s| ListItem::new(*s)).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).style(block_style))
        .highlight_style(palette.selected_style)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(listbox.selected);
    f.render_stateful_widget(list, area, &mut state);
}
