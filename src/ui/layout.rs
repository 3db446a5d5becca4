use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::core::{FORM_LABEL, FORM_SUBMIT, TOOLBAR_BUTTON};

/// Every rect the frame is carved into. Computed in one place so rendering,
/// mouse hit-testing and the structural tests agree on geometry.
#[derive(Clone, Copy, Debug, Default)]
pub struct AppLayout {
    pub menu: Rect,
    pub toolbar: Rect,
    pub toolbar_button: Rect,
    pub form: Rect,
    pub form_label: Rect,
    pub form_entry: Rect,
    pub form_submit: Rect,
    pub slider: Rect,
    pub spin: Rect,
    pub list: Rect,
    pub dropdown: Rect,
    pub table: Rect,
    pub canvas: Rect,
    pub status: Rect,
}

/// Width of a `[ label ]` button rendering.
pub fn button_width(label: &str) -> u16 {
    label.len() as u16 + 4
}

pub fn compute(area: Rect) -> AppLayout {
    // menu (1), toolbar (1), main (min), status (1)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);

    // Left column: form, slider, spin box, list, drop-down.
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    // Right column: table on top, canvas filling the rest.
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(columns[1]);

    let form_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(FORM_LABEL.len() as u16 + 1),
            Constraint::Min(10),
            Constraint::Length(button_width(FORM_SUBMIT)),
        ])
        .split(left[0]);

    let toolbar = rows[1];
    let toolbar_button = Rect {
        x: toolbar.x.saturating_add(1),
        y: toolbar.y,
        width: button_width(TOOLBAR_BUTTON).min(toolbar.width.saturating_sub(1)),
        height: toolbar.height.min(1),
    };

    AppLayout {
        menu: rows[0],
        toolbar,
        toolbar_button,
        form: left[0],
        form_label: form_columns[0],
        form_entry: form_columns[1],
        form_submit: form_columns[2],
        slider: left[1],
        spin: left[2],
        list: left[3],
        dropdown: left[4],
        table: right[0],
        canvas: right[1],
        status: rows[3],
    }
}

/// Popup rect for the open drop-down: anchored under the closed widget,
/// clamped so it stays inside the frame.
pub fn dropdown_popup(anchor: Rect, items: usize, frame: Rect) -> Rect {
    let height = (items as u16 + 2).min(frame.height);
    let width = anchor.width.min(frame.width);
    let x = anchor.x.min(frame.width.saturating_sub(width));
    let y = anchor
        .y
        .saturating_add(anchor.height)
        .min(frame.height.saturating_sub(height));
    Rect {
        x,
        y,
        width,
        height,
    }
}
