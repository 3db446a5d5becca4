use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::{Action, App, Mode};
use crate::ui::colors;

pub struct MenuItem {
    pub label: &'static str,
    pub action: Action,
}

pub struct TopMenu {
    pub label: &'static str,
    pub items: Vec<MenuItem>,
}

/// The static two-menu model: File -> Exit, Help -> About.
pub fn menu_model() -> Vec<TopMenu> {
    vec![
        TopMenu {
            label: "File",
            items: vec![MenuItem {
                label: "Exit",
                action: Action::Exit,
            }],
        },
        TopMenu {
            label: "Help",
            items: vec![MenuItem {
                label: "About",
                action: Action::About,
            }],
        },
    ]
}

pub fn menu_labels() -> Vec<&'static str> {
    menu_model().iter().map(|t| t.label).collect()
}

// Each label occupies len+2 cells ("[File]" or " File "), separated by one
// space, so offsets stay fixed whichever label is active.
fn label_offsets() -> Vec<(u16, u16)> {
    let mut out = Vec::new();
    let mut start = 0u16;
    for label in menu_labels() {
        let width = label.len() as u16 + 2;
        out.push((start, width));
        start += width + 1;
    }
    out
}

/// Which top-level label sits under column `x` (relative to the menu row).
pub fn hit_top(x: u16) -> Option<usize> {
    label_offsets()
        .iter()
        .position(|(start, width)| x >= *start && x < start + width)
}

/// Render the one-row menu bar. The active label is bracketed and highlighted
/// while the menu has focus.
pub fn draw_menu(f: &mut Frame, area: Rect, app: &App) {
    let palette = colors::current();
    let selected = match app.mode {
        Mode::Menu { selected, .. } => Some(selected),
        _ => None,
    };

    let labels = menu_labels();
    let mut spans: Vec<Span> = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", palette.menu_style));
        }
        if Some(i) == selected {
            spans.push(Span::styled(format!("[{label}]"), palette.menu_active_style));
        } else {
            spans.push(Span::styled(format!(" {label} "), palette.menu_style));
        }
    }

    let bar = Paragraph::new(Line::from(spans)).style(palette.menu_style);
    f.render_widget(bar, area);
}

/// Render the open drop-down under its top-level label, clamped to the frame.
pub fn draw_submenu(f: &mut Frame, frame: Rect, selected: usize, sub_selected: usize) {
    let model = menu_model();
    let Some(top) = model.get(selected) else {
        return;
    };

    let palette = colors::current();
    let offsets = label_offsets();
    let (start, _) = offsets.get(selected).copied().unwrap_or((0, 0));

    let width = top
        .items
        .iter()
        .map(|it| it.label.len())
        .max()
        .unwrap_or(8) as u16
        + 4;
    let height = top.items.len() as u16 + 2;
    let area = Rect {
        x: start.min(frame.width.saturating_sub(width)),
        y: 1,
        width: width.min(frame.width),
        height: height.min(frame.height.saturating_sub(1)),
    };

    let items: Vec<ListItem> = top
        .items
        .iter()
        .enumerate()
        .map(|(i, it)| {
            if i == sub_selected {
                ListItem::new(format!("> {}", it.label)).style(palette.selected_style)
            } else {
                ListItem::new(format!("  {}", it.label))
            }
        })
        .collect();

    f.render_widget(Clear, area);
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(top.label))
        .style(palette.menu_style);
    f.render_widget(list, area);
}
