use crate::app::{Action, App, Focus, Mode};
use crate::input::keyboard::{self, KeyCode, KeyEvent};
use crate::runner::commands;

/// Keys in Normal mode: Tab order, menu focus, and per-widget editing.
pub fn handle_normal(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    let code = key.code;

    if keyboard::is_menu_key(&code) {
        app.mode = Mode::Menu {
            selected: 0,
            open: false,
            sub_selected: 0,
        };
        return Ok(false);
    }

    match code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return Ok(false);
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return Ok(false);
        }
        _ => {}
    }

    match app.focus {
        // Both buttons share the one acknowledgement handler.
        Focus::Toolbar | Focus::FormSubmit => {
            if keyboard::is_activate(&key) {
                return Ok(commands::perform_action(app, Action::Acknowledge));
            }
        }
        Focus::FormEntry => match code {
            KeyCode::Char(c) if keyboard::is_printable_key(&key) => app.form.insert(c),
            KeyCode::Backspace => app.form.backspace(),
            KeyCode::Delete => app.form.delete(),
            KeyCode::Left => app.form.move_left(),
            KeyCode::Right => app.form.move_right(),
            KeyCode::Home => app.form.move_home(),
            KeyCode::End => app.form.move_end(),
            _ => {}
        },
        Focus::Slider => match code {
            KeyCode::Left | KeyCode::Down => app.slider.step_down(),
            KeyCode::Right | KeyCode::Up => app.slider.step_up(),
            KeyCode::Home => app.slider.set_min(),
            KeyCode::End => app.slider.set_max(),
            _ => {}
        },
        Focus::Spin => match code {
            KeyCode::Up => app.spin.step_up(),
            KeyCode::Down => app.spin.step_down(),
            _ => {}
        },
        Focus::List => match code {
            KeyCode::Up => app.listbox.select_prev(),
            KeyCode::Down => app.listbox.select_next(),
            _ => {}
        },
        Focus::Dropdown => {
            if keyboard::is_activate(&key) || matches!(code, KeyCode::Down) {
                let highlighted = app.dropdown.chosen.unwrap_or(0);
                app.mode = Mode::Dropdown { highlighted };
            }
        }
        Focus::Table => match code {
            KeyCode::Up => app.table.select_prev(),
            KeyCode::Down => app.table.select_next(),
            _ => {}
        },
    }

    Ok(false)
}
