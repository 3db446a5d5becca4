use once_cell::sync::Lazy;
use ratatui::style::{Modifier, Style};
use std::sync::Mutex;

use crate::ui::Theme;

/// Concrete runtime styles derived once from a `Theme`. Widgets read these
/// through `current()` instead of mixing palette math into render code.
#[derive(Clone, Debug, Default)]
pub struct Colors {
    pub menu_style: Style,
    pub menu_active_style: Style,
    pub toolbar_style: Style,
    pub button_style: Style,
    pub button_focus_style: Style,
    pub status_style: Style,
    pub block_style: Style,
    pub block_focus_style: Style,
    pub selected_style: Style,
    pub gauge_style: Style,
    pub table_header_style: Style,
    pub dialog_style: Style,
    pub dialog_button_style: Style,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(Colors::default()));

pub fn current() -> Colors {
    CURRENT.lock().unwrap().clone()
}

pub fn set_theme(name: &str) {
    match name {
        "dark" => set_from_theme(&Theme::dark()),
        "light" => set_from_theme(&Theme::light()),
        _ => {}
    }
}

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(theme: &Theme) {
    let base = Style::default().fg(theme.fg).bg(theme.bg);
    let inverted = Style::default().fg(theme.bg).bg(theme.accent);

    let mut g = CURRENT.lock().unwrap();
    *g = Colors {
        menu_style: base,
        menu_active_style: inverted,
        toolbar_style: base,
        button_style: base.add_modifier(Modifier::BOLD),
        button_focus_style: inverted.add_modifier(Modifier::BOLD),
        status_style: base,
        block_style: base,
        block_focus_style: Style::default().fg(theme.accent).bg(theme.bg),
        selected_style: inverted,
        gauge_style: Style::default().fg(theme.accent).bg(theme.bg),
        table_header_style: Style::default()
            .fg(theme.accent)
            .bg(theme.bg)
            .add_modifier(Modifier::BOLD),
        dialog_style: base,
        dialog_button_style: inverted.add_modifier(Modifier::BOLD),
    };
}
