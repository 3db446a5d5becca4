use crate::app::core::{ABOUT_MESSAGE, ABOUT_TITLE, ACK_MESSAGE, ACK_TITLE};
use crate::app::{Action, App, Lifecycle};

/// Execute a menu or button action. Returns `true` when the event loop
/// should stop.
pub fn perform_action(app: &mut App, action: Action) -> bool {
    match action {
        Action::Acknowledge => {
            tracing::debug!("acknowledgement dialog opened");
            app.open_message(ACK_TITLE, ACK_MESSAGE);
            false
        }
        Action::About => {
            tracing::debug!("about dialog opened");
            app.open_message(ABOUT_TITLE, ABOUT_MESSAGE);
            false
        }
        Action::Exit => {
            tracing::info!("exit requested, terminating event loop");
            app.lifecycle = Lifecycle::Terminated;
            true
        }
    }
}
