// Keyboard predicates. Bindings are fixed; the helpers exist so handlers
// talk about actions rather than raw `KeyCode` patterns.

pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Printable character without a control modifier.
pub fn is_printable_key(ev: &KeyEvent) -> bool {
    matches!(ev.code, KeyCode::Char(_)) && !ev.modifiers.contains(KeyModifiers::CONTROL)
}

/// Ctrl+C, the conventional terminal interrupt.
pub fn is_interrupt(ev: &KeyEvent) -> bool {
    ev.modifiers.contains(KeyModifiers::CONTROL) && matches!(ev.code, KeyCode::Char('c'))
}

/// Enter or Space activates a focused button-like widget.
pub fn is_activate(ev: &KeyEvent) -> bool {
    matches!(ev.code, KeyCode::Enter | KeyCode::Char(' '))
}

/// F1 or F10 both move focus to the menu bar.
pub fn is_menu_key(code: &KeyCode) -> bool {
    matches!(code, KeyCode::F(1) | KeyCode::F(10))
}

pub fn is_enter(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Enter)
}

pub fn is_esc(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Esc)
}

pub fn is_left(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Left)
}

pub fn is_right(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Right)
}

pub fn is_up(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Up)
}

pub fn is_down(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Down)
}
