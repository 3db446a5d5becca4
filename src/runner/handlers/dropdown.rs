use crate::app::{App, Mode};
use crate::input::keyboard::{self, KeyEvent};

/// Keys while the country drop-down popup is open.
pub fn handle_dropdown(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    let mut highlighted = match app.mode {
        Mode::Dropdown { highlighted } => highlighted,
        _ => return Ok(false),
    };

    let count = app.dropdown.items.len();
    if count == 0 {
        app.mode = Mode::Normal;
        return Ok(false);
    }

    let code = key.code;
    if keyboard::is_up(&code) {
        highlighted = if highlighted == 0 { count - 1 } else { highlighted - 1 };
        app.mode = Mode::Dropdown { highlighted };
    } else if keyboard::is_down(&code) {
        highlighted = (highlighted + 1) % count;
        app.mode = Mode::Dropdown { highlighted };
    } else if keyboard::is_enter(&code) {
        app.dropdown.chosen = Some(highlighted.min(count - 1));
        app.mode = Mode::Normal;
    } else if keyboard::is_esc(&code) {
        app.mode = Mode::Normal;
    }

    Ok(false)
}
