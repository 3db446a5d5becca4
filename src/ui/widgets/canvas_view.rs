use ratatui::layout::Rect;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Rectangle};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::core::{CanvasSpec, Shape};
use crate::ui::colors;

/// Paint the static shapes onto a braille canvas. The y axis is flipped so
/// the shape literals can stay in top-left-origin coordinates.
pub fn render(f: &mut Frame, area: Rect, spec: &CanvasSpec) {
    let palette = colors::current();

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).style(palette.block_style))
        .x_bounds([0.0, spec.width])
        .y_bounds([0.0, spec.height])
        .paint(|ctx| {
            for shape in &spec.shapes {
                match *shape {
                    Shape::Line {
                        x1,
                        y1,
                        x2,
                        y2,
                        color,
                    } => ctx.draw(&CanvasLine {
                        x1,
                        y1: spec.height - y1,
                        x2,
                        y2: spec.height - y2,
                        color,
                    }),
                    Shape::Rect {
                        x1,
                        y1,
                        x2,
                        y2,
                        color,
                    } => ctx.draw(&Rectangle {
                        x: x1,
                        y: spec.height - y2,
                        width: x2 - x1,
                        height: y2 - y1,
                        color,
                    }),
                }
            }
        });
    f.render_widget(canvas, area);
}
