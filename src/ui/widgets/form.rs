use ratatui::style::{Modifier, Style};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;

use crate::app::core::{FormState, FORM_LABEL, FORM_SUBMIT};
use crate::app::{App, Focus};
use crate::ui::colors;
use crate::ui::layout::AppLayout;

/// Label, entry and Submit button on one row.
pub fn render(f: &mut Frame, l: &AppLayout, app: &App) {
    let palette = colors::current();

    f.render_widget(Paragraph::new(FORM_LABEL), middle_row(l.form_label));

    let entry_focused = app.focus == Focus::FormEntry;
    let block_style = if entry_focused {
        palette.block_focus_style
    } else {
        palette.block_style
    };
    let entry = Paragraph::new(entry_line(&app.form, entry_focused))
        .block(Block::default().borders(Borders::ALL).style(block_style));
    f.render_widget(entry, l.form_entry);

    let submit_style = if app.focus == Focus::FormSubmit {
        palette.button_focus_style
    } else {
        palette.button_style
    };
    let submit = Paragraph::new(format!("[ {FORM_SUBMIT} ]")).style(submit_style);
    f.render_widget(submit, middle_row(l.form_submit));
}

// Single-row slice vertically centered in `area`, for the un-bordered pieces
// sitting next to the 3-row entry box.
fn middle_row(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: area.height.min(1),
    }
}

/// Entry text with the cursor grapheme reversed while the entry has focus.
fn entry_line(form: &FormState, focused: bool) -> Line<'_> {
    let (before, rest) = form.buffer.split_at(form.cursor.min(form.buffer.len()));
    let mut spans = vec![Span::raw(before)];

    if !focused {
        spans.push(Span::raw(rest));
        return Line::from(spans);
    }

    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    match rest.graphemes(true).next() {
        Some(g) => {
            spans.push(Span::styled(g.to_string(), cursor_style));
            spans.push(Span::raw(&rest[g.len()..]));
        }
        None => spans.push(Span::styled(" ", cursor_style)),
    }
    Line::from(spans)
}
