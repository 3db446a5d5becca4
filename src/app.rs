pub mod core;
pub mod types;
pub mod window;

pub use self::core::App;
pub use self::types::{Action, Focus, Lifecycle, Mode};
