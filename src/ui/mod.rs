use ratatui::Frame;

use crate::app::{App, Focus, Mode};

pub mod colors;
pub mod dialogs;
pub mod layout;
pub mod menu;
pub mod themes;
pub mod widgets;

pub use themes::Theme;

/// Draw one frame: menu bar, toolbar, both widget columns, status bar, and
/// whichever popup the current mode owns.
pub fn ui(f: &mut Frame, app: &App) {
    let l = layout::compute(f.area());
    let in_normal = matches!(app.mode, Mode::Normal);
    let focused = |w: Focus| in_normal && app.focus == w;

    menu::draw_menu(f, l.menu, app);
    widgets::toolbar::render(f, l.toolbar, l.toolbar_button, focused(Focus::Toolbar));
    widgets::form::render(f, &l, app);
    widgets::slider::render(f, l.slider, &app.slider, focused(Focus::Slider));
    widgets::spinbox::render(f, l.spin, &app.spin, focused(Focus::Spin));
    widgets::listbox::render(f, l.list, &app.listbox, focused(Focus::List));
    widgets::dropdown::render(f, l.dropdown, &app.dropdown, focused(Focus::Dropdown));
    widgets::table_view::render(f, l.table, &app.table, focused(Focus::Table));
    widgets::canvas_view::render(f, l.canvas, &app.canvas);
    widgets::status_bar::render(f, l.status, &app.status);

    match &app.mode {
        Mode::Menu {
            selected,
            open: true,
            sub_selected,
        } => menu::draw_submenu(f, f.area(), *selected, *sub_selected),
        Mode::Dropdown { highlighted } => {
            widgets::dropdown::render_popup(f, f.area(), l.dropdown, &app.dropdown, *highlighted)
        }
        Mode::Message {
            title,
            content,
            buttons,
            selected,
        } => {
            let refs: Vec<&str> = buttons.iter().map(String::as_str).collect();
            dialogs::draw_info(f, f.area(), title, content, &refs, *selected);
        }
        _ => {}
    }
}
