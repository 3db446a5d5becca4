use ratatui::style::Color;
use unicode_segmentation::UnicodeSegmentation;

use super::types::{Focus, Lifecycle, Mode};
use super::window::WindowSpec;

// User-visible literals. The dialogs and the status bar are checked against
// these exact strings by the integration tests.
pub const STATUS_READY: &str = "Ready";
pub const TOOLBAR_BUTTON: &str = "Click Me";
pub const FORM_LABEL: &str = "Enter Your Name:";
pub const FORM_SUBMIT: &str = "Submit";
pub const ACK_TITLE: &str = "Event Triggered";
pub const ACK_MESSAGE: &str = "Button Clicked Successfully!";
pub const ABOUT_TITLE: &str = "About";
pub const ABOUT_MESSAGE: &str = "Tkinter GUI Demo";

/// Single-line text entry with a byte-offset cursor. Motion and deletion work
/// on grapheme clusters so multi-byte input behaves.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub buffer: String,
    pub cursor: usize,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some((start, len)) = self.prev_grapheme() {
            self.buffer.drain(start..start + len);
            self.cursor = start;
        }
    }

    pub fn delete(&mut self) {
        if let Some(len) = self.next_grapheme_len() {
            let at = self.cursor;
            self.buffer.drain(at..at + len);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((start, _)) = self.prev_grapheme() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(len) = self.next_grapheme_len() {
            self.cursor += len;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    fn prev_grapheme(&self) -> Option<(usize, usize)> {
        self.buffer[..self.cursor]
            .grapheme_indices(true)
            .last()
            .map(|(i, g)| (i, g.len()))
    }

    fn next_grapheme_len(&self) -> Option<usize> {
        self.buffer[self.cursor..].graphemes(true).next().map(str::len)
    }
}

/// Horizontal range selector, bounds inclusive.
#[derive(Clone, Copy, Debug)]
pub struct SliderState {
    pub label: &'static str,
    pub value: u16,
    pub min: u16,
    pub max: u16,
}

impl SliderState {
    pub fn step_up(&mut self) {
        self.value = (self.value + 1).min(self.max);
    }

    pub fn step_down(&mut self) {
        self.value = self.value.saturating_sub(1).max(self.min);
    }

    pub fn set_min(&mut self) {
        self.value = self.min;
    }

    pub fn set_max(&mut self) {
        self.value = self.max;
    }

    /// Filled fraction for the gauge rendering, always within 0..=1.
    pub fn ratio(&self) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        f64::from(self.value - self.min) / f64::from(self.max - self.min)
    }
}

/// Bounded numeric stepper. Clamps at the bounds, no wrap-around.
#[derive(Clone, Copy, Debug)]
pub struct SpinState {
    pub value: u16,
    pub min: u16,
    pub max: u16,
}

impl SpinState {
    pub fn step_up(&mut self) {
        self.value = (self.value + 1).min(self.max);
    }

    pub fn step_down(&mut self) {
        self.value = self.value.saturating_sub(1).max(self.min);
    }
}

/// Single-selection list over fixed entries. Starts with nothing selected.
#[derive(Clone, Debug)]
pub struct ListBoxState {
    pub items: Vec<&'static str>,
    pub selected: Option<usize>,
}

impl ListBoxState {
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(self.items.len() - 1),
        });
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => i.saturating_sub(1),
        });
    }
}

/// Drop-down with a placeholder shown until a choice is made.
#[derive(Clone, Debug)]
pub struct DropdownState {
    pub placeholder: &'static str,
    pub items: Vec<&'static str>,
    pub chosen: Option<usize>,
}

impl DropdownState {
    /// Text shown in the closed state.
    pub fn display(&self) -> &str {
        self.chosen
            .and_then(|i| self.items.get(i).copied())
            .unwrap_or(self.placeholder)
    }
}

/// Read-only three-column table with a movable row highlight.
#[derive(Clone, Debug)]
pub struct TableViewState {
    pub columns: [&'static str; 3],
    pub rows: Vec<(u32, &'static str, &'static str)>,
    pub selected: Option<usize>,
}

impl TableViewState {
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(self.rows.len() - 1),
        });
    }

    pub fn select_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => i.saturating_sub(1),
        });
    }
}

/// Static shapes painted onto the drawing surface. Coordinates are
/// top-left-origin; the renderer flips the y axis.
#[derive(Clone, Copy, Debug)]
pub enum Shape {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
    },
    Rect {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
    },
}

#[derive(Clone, Debug)]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<Shape>,
}

impl CanvasSpec {
    pub fn demo() -> Self {
        Self {
            width: 300.0,
            height: 200.0,
            shapes: vec![
                Shape::Line {
                    x1: 10.0,
                    y1: 10.0,
                    x2: 200.0,
                    y2: 10.0,
                    color: Color::Blue,
                },
                Shape::Rect {
                    x1: 50.0,
                    y1: 50.0,
                    x2: 150.0,
                    y2: 120.0,
                    color: Color::Red,
                },
            ],
        }
    }
}

/// The one owning context object: every widget's state, built once at entry.
pub struct App {
    pub window: WindowSpec,
    pub lifecycle: Lifecycle,
    pub mode: Mode,
    pub focus: Focus,
    pub status: String,
    pub form: FormState,
    pub slider: SliderState,
    pub spin: SpinState,
    pub listbox: ListBoxState,
    pub dropdown: DropdownState,
    pub table: TableViewState,
    pub canvas: CanvasSpec,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: WindowSpec::demo(),
            lifecycle: Lifecycle::Running,
            mode: Mode::Normal,
            focus: Focus::Toolbar,
            status: STATUS_READY.to_string(),
            form: FormState::new(),
            slider: SliderState {
                label: "Volume",
                value: 0,
                min: 0,
                max: 100,
            },
            spin: SpinState {
                value: 1,
                min: 1,
                max: 10,
            },
            listbox: ListBoxState {
                items: vec!["Python", "Java", "C++"],
                selected: None,
            },
            dropdown: DropdownState {
                placeholder: "Select Country",
                items: vec!["India", "USA", "UK", "Canada"],
                chosen: None,
            },
            table: TableViewState {
                columns: ["ID", "Name", "Course"],
                rows: vec![(1, "Nischal", "Python"), (2, "Alex", "Java")],
                selected: None,
            },
            canvas: CanvasSpec::demo(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    /// Open the modal dialog with a single OK button.
    pub fn open_message(&mut self, title: &str, content: &str) {
        self.mode = Mode::Message {
            title: title.to_string(),
            content: content.to_string(),
            buttons: vec!["OK".to_string()],
            selected: 0,
        };
    }

    pub fn dismiss_message(&mut self) {
        if matches!(self.mode, Mode::Message { .. }) {
            self.mode = Mode::Normal;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
