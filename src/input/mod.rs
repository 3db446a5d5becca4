//! Thin wrapper over the crossterm event stream so the runner never touches
//! the backend types directly.

pub mod keyboard;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind, MouseEvent};

/// Normalized input events delivered to the runner.
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Other,
}

pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

pub fn read_event() -> io::Result<InputEvent> {
    Ok(match event::read()? {
        // Key releases show up on some platforms; only presses and repeats count.
        Event::Key(k) if k.kind != KeyEventKind::Release => InputEvent::Key(k),
        Event::Mouse(m) => InputEvent::Mouse(m),
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::Other,
    })
}
