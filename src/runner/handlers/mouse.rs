use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::{Action, App, Focus, Mode};
use crate::runner::commands;
use crate::ui::{layout, menu};

fn hit(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Route a mouse event. Only left-button presses do anything: the two wired
/// button rects activate, the menu bar opens, focusable widgets take focus.
pub fn handle_mouse(app: &mut App, me: MouseEvent, term: Rect) -> anyhow::Result<bool> {
    if !matches!(me.kind, MouseEventKind::Down(MouseButton::Left)) {
        return Ok(false);
    }
    let (x, y) = (me.column, me.row);

    // A click while a dialog is open dismisses it, nothing else.
    if matches!(app.mode, Mode::Message { .. }) {
        app.dismiss_message();
        return Ok(false);
    }
    // Menu or drop-down popup open: a click closes it.
    if !matches!(app.mode, Mode::Normal) {
        app.mode = Mode::Normal;
        return Ok(false);
    }

    let l = layout::compute(term);

    if hit(l.toolbar_button, x, y) {
        app.focus = Focus::Toolbar;
        return Ok(commands::perform_action(app, Action::Acknowledge));
    }
    if hit(l.form_submit, x, y) {
        app.focus = Focus::FormSubmit;
        return Ok(commands::perform_action(app, Action::Acknowledge));
    }
    if hit(l.menu, x, y) {
        if let Some(selected) = menu::hit_top(x.saturating_sub(l.menu.x)) {
            app.mode = Mode::Menu {
                selected,
                open: true,
                sub_selected: 0,
            };
        }
        return Ok(false);
    }

    for (area, focus) in [
        (l.form_entry, Focus::FormEntry),
        (l.slider, Focus::Slider),
        (l.spin, Focus::Spin),
        (l.list, Focus::List),
        (l.dropdown, Focus::Dropdown),
        (l.table, Focus::Table),
    ] {
        if hit(area, x, y) {
            app.focus = focus;
            return Ok(false);
        }
    }

    Ok(false)
}
