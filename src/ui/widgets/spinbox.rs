use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::core::SpinState;
use crate::ui::colors;

/// Bounded numeric stepper; Up/Down adjust while focused.
pub fn render(f: &mut Frame, area: Rect, spin: &SpinState, focused: bool) {
    let palette = colors::current();
    let block_style = if focused {
        palette.block_focus_style
    } else {
        palette.block_style
    };

    let body = Paragraph::new(format!(" {} ▲▼", spin.value))
        .block(Block::default().borders(Borders::ALL).style(block_style));
    f.render_widget(body, area);
}
