#[cfg(test)]
mod mock_display_server;

use crate::display_action::DisplayAction;
use crate::models::Window;
use crate::DisplayEvent;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The protocol side of the window manager: a source of events and a sink for
/// actions.
pub trait DisplayServer {
    /// Block until events are available. An empty batch means the event source is
    /// gone for good.
    fn get_next_events(&mut self) -> Vec<DisplayEvent>;

    /// Called after every pass that changed something, for renderers.
    fn update_windows(&mut self, _windows: Vec<&Window>) {}

    /// Perform one action. Some actions answer with an event, which is handled in
    /// the next pass.
    fn execute_action(&mut self, _act: DisplayAction) -> Option<DisplayEvent> {
        None
    }

    fn flush(&mut self) {}
}
