use std::io::{self, Stdout};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use thiserror::Error;

/// Errors returned by terminal initialization/restore helpers.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type DemoTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen, enable mouse capture and apply
/// the window title to the emulator. Mouse capture stays on for the lifetime
/// of the app; there is no runtime toggle.
pub fn init_terminal(title: &str) -> Result<DemoTerminal, TerminalError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore terminal state (leave alternate screen + disable raw mode) and
/// show the cursor again.
pub fn restore_terminal(mut terminal: DemoTerminal) -> Result<(), TerminalError> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
