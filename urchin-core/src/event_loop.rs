use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::{Manager, Mode, Window};
use serde::{Deserialize, Serialize};

/// Why the event loop returned.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    Restart,
    /// The display server has no more events to give.
    EventsExhausted,
}

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Service the display server until asked to quit or restart, or until it runs
    /// out of events. Every event is handled to completion before the next one.
    ///
    /// # Errors
    ///
    /// Returns an error if the display server reports a fatal protocol error.
    pub fn event_loop(&mut self) -> Result<ExitReason> {
        let mut event_buffer = vec![];
        loop {
            self.display_server.flush();
            if event_buffer.is_empty() {
                event_buffer = self.display_server.get_next_events();
                if event_buffer.is_empty() {
                    return Ok(ExitReason::EventsExhausted);
                }
            }

            let mut needs_update = false;
            for event in std::mem::take(&mut event_buffer) {
                needs_update = self.display_event_handler(event)? || needs_update;
                if self.state.exit.is_some() {
                    break;
                }
            }

            // If we need to update the displayed state.
            if needs_update {
                let windows: Vec<&Window> = match self.state.mode {
                    // When dragging only deal with the single window.
                    Mode::MovingWindow { handle, .. } | Mode::ResizingWindow { handle, .. } => {
                        self.state.clients.get(handle).into_iter().collect()
                    }
                    Mode::Normal => self.state.clients.iter().collect(),
                };
                self.display_server.update_windows(windows);
            }

            // perform any actions requested by the handlers
            while let Some(act) = self.state.actions.pop_front() {
                if let Some(event) = self.display_server.execute_action(act) {
                    event_buffer.push(event);
                }
            }

            if let Some(reason) = self.state.exit {
                tracing::debug!("Leaving the event loop: {:?}", reason);
                self.display_server.flush();
                return Ok(reason);
            }
        }
    }
}
