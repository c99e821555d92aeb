//! A display server that plays back a recorded script of events.
use std::io::BufRead;
use urchin_core::{DisplayAction, DisplayEvent, DisplayServer, Window};

/// Reads one JSON encoded `DisplayEvent` per line. Blank lines and lines starting
/// with `#` are skipped. Actions are logged and kept.
pub struct ReplayDisplayServer<R> {
    reader: R,
    line: usize,
    pub executed: Vec<DisplayAction>,
}

impl<R: BufRead> ReplayDisplayServer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            executed: vec![],
        }
    }

    fn next_event(&mut self) -> Option<DisplayEvent> {
        let mut buf = String::new();
        loop {
            buf.clear();
            match self.reader.read_line(&mut buf) {
                Ok(0) => return None,
                Ok(_) => self.line += 1,
                Err(err) => {
                    tracing::error!("Couldn't read the event script: {}", err);
                    return None;
                }
            }
            let line = buf.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(event) => return Some(event),
                Err(err) => tracing::warn!("Skipping line {}: {}", self.line, err),
            }
        }
    }
}

impl<R: BufRead> DisplayServer for ReplayDisplayServer<R> {
    fn get_next_events(&mut self) -> Vec<DisplayEvent> {
        self.next_event().into_iter().collect()
    }

    fn update_windows(&mut self, windows: Vec<&Window>) {
        tracing::trace!("{} windows to draw", windows.len());
    }

    fn execute_action(&mut self, act: DisplayAction) -> Option<DisplayEvent> {
        tracing::info!("{:?}", act);
        // a polite client closes when asked to
        let reply = match act {
            DisplayAction::KillWindow(handle) => Some(DisplayEvent::WindowDestroy(handle)),
            _ => None,
        };
        self.executed.push(act);
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urchin_core::models::{Screen, WindowHandle, Xyhw};
    use urchin_core::{Command, NewWindow};

    fn script(events: &[DisplayEvent]) -> String {
        events
            .iter()
            .map(|e| serde_json::to_string(e).unwrap())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn events_are_read_one_per_line() {
        let text = format!(
            "# two outputs\n\n{}\nnot json\n{}\n",
            script(&[DisplayEvent::ScreensChanged(vec![Screen::new(
                Xyhw::new(0, 0, 1280, 800),
                "A"
            )])]),
            script(&[DisplayEvent::SendCommand(Command::Quit)]),
        );
        let mut server = ReplayDisplayServer::new(text.as_bytes());
        assert!(matches!(
            server.get_next_events().as_slice(),
            [DisplayEvent::ScreensChanged(_)]
        ));
        assert!(matches!(
            server.get_next_events().as_slice(),
            [DisplayEvent::SendCommand(Command::Quit)]
        ));
        assert!(server.get_next_events().is_empty());
        assert_eq!(server.line, 5);
    }

    #[test]
    fn killed_windows_go_away() {
        let mut server = ReplayDisplayServer::new(&b""[..]);
        let handle = WindowHandle(4);
        let reply = server.execute_action(DisplayAction::KillWindow(handle));
        assert!(matches!(reply, Some(DisplayEvent::WindowDestroy(h)) if h == handle));
        assert_eq!(server.executed, vec![DisplayAction::KillWindow(handle)]);
    }

    #[test]
    fn scripts_drive_a_manager() {
        let window = NewWindow {
            handle: WindowHandle(1),
            geometry: Xyhw::new(0, 0, 200, 100),
            ..NewWindow::default()
        };
        let text = script(&[
            DisplayEvent::ScreensChanged(vec![Screen::new(Xyhw::new(0, 0, 1280, 800), "A")]),
            DisplayEvent::WindowCreate(window, 0, 0),
            DisplayEvent::SendCommand(Command::KillClient),
        ]);
        let server = ReplayDisplayServer::new(text.as_bytes());
        let mut manager = urchin_core::Manager::new(crate::FileConfig::default(), server);
        let reason = manager.event_loop().unwrap();
        assert_eq!(reason, urchin_core::ExitReason::EventsExhausted);
        assert!(manager.state.clients.is_empty());
        assert!(manager
            .display_server
            .executed
            .contains(&DisplayAction::KillWindow(WindowHandle(1))));
    }
}
