use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::core::DropdownState;
use crate::ui::colors;
use crate::ui::layout;

/// Closed state: placeholder or chosen entry plus a drop marker.
pub fn render(f: &mut Frame, area: Rect, dropdown: &DropdownState, focused: bool) {
    let palette = colors::current();
    let block_style = if focused {
        palette.block_focus_style
    } else {
        palette.block_style
    };

    let body = Paragraph::new(format!(" {} ▾", dropdown.display()))
        .block(Block::default().borders(Borders::ALL).style(block_style));
    f.render_widget(body, area);
}

/// Open state: popup list under the anchor, cleared so nothing bleeds through.
pub fn render_popup(
    f: &mut Frame,
    frame: Rect,
    anchor: Rect,
    dropdown: &DropdownState,
    highlighted: usize,
) {
    let palette = colors::current();
    let area = layout::dropdown_popup(anchor, dropdown.items.len(), frame);

    let items: Vec<ListItem> = dropdown
        .items
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if i == highlighted {
                ListItem::new(format!("> {s}")).style(palette.selected_style)
            } else {
                ListItem::new(format!("  {s}"))
            }
        })
        .collect();

    f.render_widget(Clear, area);
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).style(palette.block_style));
    f.render_widget(list, area);
}
