use std::time::Duration;

use crate::app::App;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal, DemoTerminal};
use crate::ui;

/// Build the demo window state, run the blocking event loop, restore the
/// terminal on the way out.
pub fn run_app() -> anyhow::Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        anyhow::bail!("stdout is not a terminal; the demo needs an interactive TTY");
    }

    let mut app = App::new();

    // The icon is decorative; a missing file is worth a warning, not a crash.
    match app.window.load_icon() {
        Ok(bytes) => tracing::debug!(bytes = bytes.len(), "window icon loaded"),
        Err(e) => tracing::warn!("{e}"),
    }

    ui::colors::set_from_theme(&ui::Theme::dark());

    let mut terminal = init_terminal(app.window.title)?;
    let result = run_loop(&mut terminal, &mut app);
    restore_terminal(terminal)?;
    result
}

fn run_loop(terminal: &mut DemoTerminal, app: &mut App) -> anyhow::Result<()> {
    while app.is_running() {
        terminal.draw(|f| ui::ui(f, app))?;

        if poll(Duration::from_millis(100))? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(app, key)? {
                        break;
                    }
                }
                InputEvent::Mouse(me) => {
                    let size = terminal.size()?;
                    let term_rect = ratatui::layout::Rect::new(0, 0, size.width, size.height);
                    if handlers::handle_mouse(app, me, term_rect)? {
                        break;
                    }
                }
                InputEvent::Resize(..) => { /* redraw on next pass */ }
                InputEvent::Other => {}
            }
        }
    }
    Ok(())
}
