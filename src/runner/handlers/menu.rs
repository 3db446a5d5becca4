use crate::app::{App, Mode};
use crate::input::keyboard::{self, KeyEvent};
use crate::runner::commands;
use crate::ui::menu;

/// Menu-bar navigation. The state is copied out up front and written back at
/// the end, which keeps the transitions easy to follow.
pub fn handle_menu(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    let (mut selected, open, mut sub_selected) = match app.mode {
        Mode::Menu {
            selected,
            open,
            sub_selected,
        } => (selected, open, sub_selected),
        _ => return Ok(false),
    };

    let model = menu::menu_model();
    let tops = model.len();
    selected = selected.min(tops - 1);
    let code = key.code;

    if !open {
        if keyboard::is_left(&code) {
            selected = if selected == 0 { tops - 1 } else { selected - 1 };
        } else if keyboard::is_right(&code) {
            selected = (selected + 1) % tops;
        } else if keyboard::is_enter(&code) || keyboard::is_down(&code) {
            app.mode = Mode::Menu {
                selected,
                open: true,
                sub_selected: 0,
            };
            return Ok(false);
        } else if keyboard::is_esc(&code) {
            app.mode = Mode::Normal;
            return Ok(false);
        }
        app.mode = Mode::Menu {
            selected,
            open,
            sub_selected,
        };
        return Ok(false);
    }

    let items = &model[selected].items;
    if keyboard::is_up(&code) {
        sub_selected = if sub_selected == 0 {
            items.len() - 1
        } else {
            sub_selected - 1
        };
    } else if keyboard::is_down(&code) {
        sub_selected = (sub_selected + 1) % items.len();
    } else if keyboard::is_left(&code) {
        // Move to the neighboring drop-down, keeping it open.
        selected = if selected == 0 { tops - 1 } else { selected - 1 };
        sub_selected = 0;
    } else if keyboard::is_right(&code) {
        selected = (selected + 1) % tops;
        sub_selected = 0;
    } else if keyboard::is_esc(&code) {
        app.mode = Mode::Menu {
            selected,
            open: false,
            sub_selected: 0,
        };
        return Ok(false);
    } else if keyboard::is_enter(&code) {
        let action = items[sub_selected.min(items.len() - 1)].action;
        app.mode = Mode::Normal;
        return Ok(commands::perform_action(app, action));
    }

    app.mode = Mode::Menu {
        selected,
        open,
        sub_selected,
    };
    Ok(false)
}
