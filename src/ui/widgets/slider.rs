use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

use crate::app::core::SliderState;
use crate::ui::colors;

/// Horizontal range selector rendered as a labeled gauge.
pub fn render(f: &mut Frame, area: Rect, slider: &SliderState, focused: bool) {
    let palette = colors::current();
    let block_style = if focused {
        palette.block_focus_style
    } else {
        palette.block_style
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(slider.label)
                .style(block_style),
        )
        .gauge_style(palette.gauge_style)
        .ratio(slider.ratio())
        .label(format!("{} / {}", slider.value, slider.max));
    f.render_widget(gauge, area);
}
