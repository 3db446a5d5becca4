//! Modal dialog rendering: a centered, cleared box with title, message and a
//! button row. Input while one is open is handled by the runner.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::colors;

fn centered_rect(width: u16, height: u16, frame: Rect) -> Rect {
    let w = width.min(frame.width);
    let h = height.min(frame.height);
    Rect {
        x: frame.x + (frame.width - w) / 2,
        y: frame.y + (frame.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Draw an informational dialog over the frame.
pub fn draw_info(
    f: &mut Frame,
    frame: Rect,
    title: &str,
    content: &str,
    buttons: &[&str],
    selected: usize,
) {
    let palette = colors::current();

    let width = (content.len().max(title.len()) as u16).saturating_add(6).max(24);
    let area = centered_rect(width, 7, frame);

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .style(palette.dialog_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let message = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(palette.dialog_style);
    f.render_widget(message, rows[1]);

    let mut spans: Vec<Span> = Vec::new();
    for (i, label) in buttons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if i == selected {
            palette.dialog_button_style
        } else {
            palette.dialog_style
        };
        spans.push(Span::styled(format!("[ {label} ]"), style));
    }
    let button_row = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(button_row, rows[2]);
}
