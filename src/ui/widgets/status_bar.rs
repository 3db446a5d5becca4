use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::colors;

/// Single-line status label anchored to the bottom edge, left-aligned.
pub fn render(f: &mut Frame, area: Rect, status: &str) {
    let palette = colors::current();
    let bar = Paragraph::new(format!(" {status}")).style(palette.status_style);
    f.render_widget(bar, area);
}
