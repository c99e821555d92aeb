use super::{DisplayAction, Mode};
use crate::config::Config;
use crate::display_event::DisplayEvent;
use crate::display_servers::DisplayServer;
use crate::errors::{Result, UrchinError};
use crate::models::Manager;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Process one event and apply its changes to the manager.
    /// Returns `Ok(true)` if changes need to be rendered.
    ///
    /// While a window is dragged, events the drag does not care about are held back
    /// and replayed in order once the button is released.
    ///
    /// # Errors
    ///
    /// Returns [`UrchinError::FatalProtocol`] for protocol errors that are not a race
    /// with a vanished client.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> Result<bool> {
        if self.state.mode.is_dragging() && !event.passes_drag() {
            tracing::debug!("Deferring {:?} until the drag ends", event);
            self.state.deferred.push_back(event);
            return Ok(false);
        }
        let releases = matches!(event, DisplayEvent::ButtonRelease);
        let mut needs_update = self.dispatch(event)?;

        if releases {
            while !self.state.mode.is_dragging() {
                let Some(event) = self.state.deferred.pop_front() else {
                    break;
                };
                needs_update = self.display_event_handler(event)? || needs_update;
            }
        }
        Ok(needs_update)
    }

    fn dispatch(&mut self, event: DisplayEvent) -> Result<bool> {
        tracing::debug!("Event: {:?}", event);
        let state = &mut self.state;
        let needs_update = match event {
            DisplayEvent::ScreensChanged(screens) => state.screens_changed_handler(screens),
            DisplayEvent::WindowCreate(w, x, y) => state.window_created_handler(w, x, y),
            DisplayEvent::WindowDestroy(handle) => state.window_destroyed_handler(handle),
            DisplayEvent::WindowReparented(handle) => state.window_reparented_handler(handle),
            DisplayEvent::WindowUnmap(handle) => state.window_unmap_handler(handle),
            DisplayEvent::WindowChange(change) => state.window_changed_handler(change),
            DisplayEvent::ConfigureRequest {
                handle,
                x,
                y,
                w,
                h,
                border,
            } => state.configure_request_handler(handle, (x, y, w, h), border),

            DisplayEvent::MouseCombo {
                modmask,
                button,
                target,
                x,
                y,
            } => state.mouse_combo_handler(modmask, button, target, x, y),
            DisplayEvent::ButtonRelease => state.button_release_handler(),

            DisplayEvent::KeyCombo(modmask, keysym) => {
                // look through the config and build a command if its defined in the config
                let command = self.config.command_for_key(modmask.clean(), keysym);
                command.is_some_and(|cmd| state.command_handler(&cmd))
            }
            DisplayEvent::SendCommand(command) => state.command_handler(&command),

            DisplayEvent::Motion(x, y) => match state.mode {
                Mode::MovingWindow { .. } => state.window_move_handler(x, y),
                Mode::ResizingWindow { .. } => state.window_resize_handler(x, y),
                Mode::Normal => {
                    state.focus_manager.last_mouse_position = (x, y);
                    match state.monitor_at(x, y) {
                        Some(m) if m != state.focus_manager.monitor => {
                            state.focus_manager.monitor = m;
                            state.focus(None);
                            true
                        }
                        _ => false,
                    }
                }
            },
            DisplayEvent::WindowEnter(handle, x, y) => state.window_enter_handler(handle, x, y),
            DisplayEvent::LeaveScreen => state.leave_screen_handler(),

            DisplayEvent::Expose(handle) => {
                if state.clients.get(handle).is_some() {
                    state.actions.push_back(DisplayAction::Redraw(handle));
                }
                false
            }
            DisplayEvent::MappingChanged => {
                state.actions.push_back(DisplayAction::ReloadKeyGrabs);
                false
            }

            DisplayEvent::ProtocolError(error) => {
                if error.is_benign() {
                    tracing::trace!("Ignoring protocol error: {}", error);
                    false
                } else {
                    tracing::error!("Fatal protocol error: {}", error);
                    return Err(UrchinError::FatalProtocol(error));
                }
            }
        };
        Ok(needs_update)
    }
}
