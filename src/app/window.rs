//! Declared window geometry and the optional icon resource.

use std::path::PathBuf;

use crate::errors::ResourceError;

pub const WINDOW_TITLE: &str = "Tkinter GUI Demo";
/// Logical window geometry in pixels. A cell grid cannot honor pixels, so
/// these stay declared metadata; the layout adapts to the real terminal size.
pub const WINDOW_WIDTH: u16 = 900;
pub const WINDOW_HEIGHT: u16 = 700;
pub const ICON_PATH: &str = "assets/icon.ico";

#[derive(Clone, Debug)]
pub struct WindowSpec {
    pub title: &'static str,
    pub width: u16,
    pub height: u16,
    pub icon_path: PathBuf,
}

impl WindowSpec {
    pub fn demo() -> Self {
        Self {
            title: WINDOW_TITLE,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            icon_path: PathBuf::from(ICON_PATH),
        }
    }

    /// Read the icon resource from its fixed relative path. The caller
    /// decides what a failure means; at startup it is only worth a warning.
    pub fn load_icon(&self) -> Result<Vec<u8>, ResourceError> {
        std::fs::read(&self.icon_path).map_err(|source| ResourceError::Icon {
            path: self.icon_path.clone(),
            source,
        })
    }
}
