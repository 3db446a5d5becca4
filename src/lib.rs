pub mod app;
pub mod errors;
pub mod input;
pub mod logging;
pub mod runner;
pub mod ui;

pub use crate::app::window::WindowSpec;
pub use crate::app::{Action, App, Focus, Lifecycle, Mode};
