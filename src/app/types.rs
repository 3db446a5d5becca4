//! Plain state enums shared across the runner and the UI.

/// Lifecycle of the event loop. The only transition is Running -> Terminated,
/// driven by the File/Exit action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Running,
    Terminated,
}

/// The actions reachable from the menu bar and the two wired buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Shared acknowledgement handler: toolbar button and form Submit.
    Acknowledge,
    /// Help/About informational dialog.
    About,
    /// File/Exit: stop the event loop.
    Exit,
}

/// Input-routing mode. Anything other than `Normal` owns the keyboard until
/// it is closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Menu bar focused; `open` means the drop-down under `selected` is showing.
    Menu {
        selected: usize,
        open: bool,
        sub_selected: usize,
    },
    /// The country drop-down popup is showing.
    Dropdown { highlighted: usize },
    /// A modal dialog. Blocks all other input until dismissed.
    Message {
        title: String,
        content: String,
        buttons: Vec<String>,
        selected: usize,
    },
}

/// Keyboard focus over the interactive widgets, cycled with Tab/Shift+Tab.
/// The canvas is decorative and never takes focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Toolbar,
    FormEntry,
    FormSubmit,
    Slider,
    Spin,
    List,
    Dropdown,
    Table,
}

impl Focus {
    pub const ORDER: [Focus; 8] = [
        Focus::Toolbar,
        Focus::FormEntry,
        Focus::FormSubmit,
        Focus::Slider,
        Focus::Spin,
        Focus::List,
        Focus::Dropdown,
        Focus::Table,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}
