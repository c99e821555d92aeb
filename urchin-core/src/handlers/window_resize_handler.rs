use crate::models::{Mode, Xyhw};
use crate::state::State;

/// Smallest frame an interactive resize produces.
const MIN_SIZE: i32 = 12;

impl State {
    /// Pointer motion while a window is being resized. The pointer is the bottom
    /// right corner of the frame.
    pub fn window_resize_handler(&mut self, x: i32, y: i32) -> bool {
        let Mode::ResizingWindow {
            handle, monitor, ..
        } = self.mode
        else {
            return false;
        };
        let Some(window) = self.clients.get(handle) else {
            return false;
        };
        let g = window.geometry;
        let border = window.border;
        let size = |pointer: i32, origin: i32| {
            let len = pointer - origin - 2 * border + 1;
            if len <= 0 {
                MIN_SIZE
            } else {
                len.max(MIN_SIZE)
            }
        };
        let frame = Xyhw::new(g.x, g.y, size(x, g.x), size(y, g.y));
        self.resize_window(handle, monitor, frame, true);
        true
    }
}
