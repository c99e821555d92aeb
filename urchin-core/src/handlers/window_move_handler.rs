use crate::display_action::DisplayAction;
use crate::models::{Mode, Xyhw};
use crate::state::State;

impl State {
    /// Pointer motion while a window is being dragged. Returns `true` if the window
    /// moved.
    pub fn window_move_handler(&mut self, x: i32, y: i32) -> bool {
        let Mode::MovingWindow {
            handle,
            monitor,
            origin,
            start,
        } = self.mode
        else {
            return false;
        };
        let Some(border) = self.clients.get(handle).map(|w| w.border) else {
            return false;
        };
        let target = self.monitor_at(x, y).unwrap_or(monitor);
        let Some(m) = self.monitors.get(target) else {
            return false;
        };
        let (area, seltags) = (m.work_area(), m.seltags);

        let mut frame = start.translated(x - origin.0, y - origin.1);
        snap(&mut frame, area, border, self.snap);
        self.resize_window(handle, target, frame, false);

        if target != monitor {
            tracing::debug!("{:?} dragged onto monitor {}", handle, target);
            if let Some(w) = self.clients.get_mut(handle) {
                w.tags = seltags;
            }
            self.actions.push_back(DisplayAction::Redraw(handle));
            self.mode = Mode::MovingWindow {
                handle,
                monitor: target,
                origin,
                start,
            };
        }
        true
    }
}

/// Pull a frame onto the edges of `area` when it comes within `distance` pixels.
fn snap(frame: &mut Xyhw, area: Xyhw, border: i32, distance: i32) {
    let outer_w = frame.w + 2 * border;
    let outer_h = frame.h + 2 * border;
    if (frame.x - area.x).abs() < distance {
        frame.x = area.x;
    } else if (area.right() - (frame.x + outer_w)).abs() < distance {
        frame.x = area.right() - outer_w;
    }
    if (frame.y - area.y).abs() < distance {
        frame.y = area.y;
    } else if (area.bottom() - (frame.y + outer_h)).abs() < distance {
        frame.y = area.bottom() - outer_h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_event::ClickTarget;
    use crate::layouts::Layout;
    use crate::models::{Screen, TagSet, WindowHandle};
    use crate::utils::modmask_lookup::{Button, ModMask};

    fn floating_state(screens: Vec<Screen>) -> State {
        let mut state = State::new_test(screens);
        for tag in 0..state.tags.len() {
            if let Some(tag) = state.tags.get_mut(tag) {
                tag.layout = Layout::Floating;
            }
        }
        state
    }

    fn grab(state: &mut State, handle: WindowHandle, x: i32, y: i32) {
        let target = ClickTarget::Title(handle);
        state.mouse_combo_handler(ModMask::empty(), Button::Button1, target, x, y);
    }

    #[test]
    fn dragging_follows_the_pointer() {
        let mut state = floating_state(vec![Screen::new(Xyhw::new(0, 0, 1280, 800), "A")]);
        let handle = state.add_test_window(1, Xyhw::new(100, 100, 200, 100));
        grab(&mut state, handle, 150, 110);
        assert!(state.window_move_handler(250, 310));
        let geo = state.clients.get(handle).unwrap().geometry;
        assert_eq!(geo, Xyhw::new(200, 300, 200, 100));
    }

    #[test]
    fn windows_snap_to_the_work_area_edges() {
        let mut state = floating_state(vec![Screen::new(Xyhw::new(0, 0, 1280, 800), "A")]);
        let handle = state.add_test_window(1, Xyhw::new(100, 100, 200, 100));
        grab(&mut state, handle, 100, 100);
        state.window_move_handler(3, 698);
        let geo = state.clients.get(handle).unwrap().geometry;
        assert_eq!((geo.x, geo.y), (0, 700));
    }

    #[test]
    fn crossing_monitors_retags_the_window() {
        let mut state = floating_state(vec![
            Screen::new(Xyhw::new(0, 0, 1280, 800), "A"),
            Screen::new(Xyhw::new(1280, 0, 1280, 800), "B"),
        ]);
        let handle = state.add_test_window(1, Xyhw::new(100, 100, 200, 100));
        grab(&mut state, handle, 110, 110);
        state.window_move_handler(1500, 110);
        let w = state.clients.get(handle).unwrap();
        assert_eq!(w.tags, TagSet::single(1));
        assert_eq!(w.monitor, Some(1));
        assert_eq!(w.geometry.x, 1490);
        assert!(matches!(state.mode, Mode::MovingWindow { monitor: 1, .. }));
    }

    #[test]
    fn motion_outside_a_drag_is_ignored() {
        let mut state = floating_state(vec![Screen::new(Xyhw::new(0, 0, 1280, 800), "A")]);
        assert!(!state.window_move_handler(10, 10));
    }
}
