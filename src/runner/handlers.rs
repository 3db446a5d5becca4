//! Split handlers: thin dispatch over the input-routing mode.

pub mod dropdown;
pub mod menu;
pub mod mouse;
pub mod normal;

pub use dropdown::handle_dropdown;
pub use menu::handle_menu;
pub use mouse::handle_mouse;
pub use normal::handle_normal;

use crate::app::{Action, App, Mode};
use crate::input::keyboard::{self, KeyEvent};
use crate::runner::commands;

/// Top-level key handler. Returns `true` when the loop should stop.
pub fn handle_key(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    // A terminated app dispatches nothing further.
    if !app.is_running() {
        return Ok(true);
    }

    // Ctrl+C stands in for the native close control so the terminal is
    // restored cleanly instead of being left in raw mode.
    if keyboard::is_interrupt(&key) {
        return Ok(commands::perform_action(app, Action::Exit));
    }

    match &mut app.mode {
        Mode::Normal => handle_normal(app, key),
        Mode::Menu { .. } => handle_menu(app, key),
        Mode::Dropdown { .. } => handle_dropdown(app, key),
        Mode::Message {
            buttons, selected, ..
        } => {
            let count = buttons.len();
            let code = key.code;
            if keyboard::is_left(&code) {
                *selected = if *selected == 0 {
                    count.saturating_sub(1)
                } else {
                    *selected - 1
                };
            } else if keyboard::is_right(&code) {
                *selected = (*selected + 1) % count.max(1);
            } else if keyboard::is_enter(&code)
                || keyboard::is_esc(&code)
                || keyboard::is_printable_key(&key)
            {
                app.mode = Mode::Normal;
            }
            Ok(false)
        }
    }
}
