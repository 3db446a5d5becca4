use ratatui::layout::Rect;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::core::TOOLBAR_BUTTON;
use crate::ui::colors;

/// One-row toolbar strip holding the single demo button.
pub fn render(f: &mut Frame, area: Rect, button: Rect, focused: bool) {
    let palette = colors::current();
    f.render_widget(Block::default().style(palette.toolbar_style), area);

    let style = if focused {
        palette.button_focus_style
    } else {
        palette.button_style
    };
    let label = Paragraph::new(format!("[ {TOOLBAR_BUTTON} ]")).style(style);
    f.render_widget(label, button);
}
