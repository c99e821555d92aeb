use super::DisplayServer;
use crate::display_action::DisplayAction;
use crate::models::{Window, WindowHandle};
use crate::DisplayEvent;
use std::collections::VecDeque;

/// Feeds scripted batches of events and records everything the manager asks for.
#[derive(Debug, Default)]
pub struct MockDisplayServer {
    pub batches: VecDeque<Vec<DisplayEvent>>,
    pub executed: Vec<DisplayAction>,
    /// Handles passed to the last `update_windows` call.
    pub updated: Vec<WindowHandle>,
    /// Event to answer the next action with.
    pub reply: Option<DisplayEvent>,
}

impl MockDisplayServer {
    pub fn push_batch(&mut self, events: Vec<DisplayEvent>) {
        self.batches.push_back(events);
    }
}

impl DisplayServer for MockDisplayServer {
    fn get_next_events(&mut self) -> Vec<DisplayEvent> {
        self.batches.pop_front().unwrap_or_default()
    }

    fn update_windows(&mut self, windows: Vec<&Window>) {
        self.updated = windows.iter().map(|w| w.handle).collect();
    }

    fn execute_action(&mut self, act: DisplayAction) -> Option<DisplayEvent> {
        self.executed.push(act);
        self.reply.take()
    }
}
