use crate::command::{Command, Direction};
use crate::display_action::DisplayAction;
use crate::display_event::ClickTarget;
use crate::models::{Mode, WindowHandle};
use crate::state::State;
use crate::utils::modmask_lookup::{Button, ModMask};

impl State {
    /// A button was pressed somewhere we listen for clicks.
    pub fn mouse_combo_handler(
        &mut self,
        modmask: ModMask,
        button: Button,
        target: ClickTarget,
        x: i32,
        y: i32,
    ) -> bool {
        self.focus_manager.last_mouse_position = (x, y);
        if let Some(m) = self.monitor_at(x, y) {
            self.focus_manager.monitor = m;
        }
        match target {
            ClickTarget::Root => self.root_click(button),
            ClickTarget::Title(handle) => self.title_click(handle, button, (x, y)),
            ClickTarget::Frame(handle) => self.frame_click(handle, modmask, button, (x, y)),
        }
    }

    /// The button of a drag was released.
    pub fn button_release_handler(&mut self) -> bool {
        let Mode::ResizingWindow { handle, .. } = self.mode else {
            return self.end_drag();
        };
        if let Some(corner) = self.resize_corner(handle) {
            self.actions
                .push_back(DisplayAction::MoveMouseOverPoint(corner));
        }
        self.end_drag()
    }

    fn end_drag(&mut self) -> bool {
        if !self.mode.is_dragging() {
            return false;
        }
        self.mode = Mode::Normal;
        self.arrange(None);
        self.actions.push_back(DisplayAction::NormalMode);
        true
    }

    fn root_click(&mut self, button: Button) -> bool {
        let monitor = self.active_monitor();
        if button == Button::Button4 {
            self.cycle_view(monitor, Direction::Left)
        } else if button == Button::Button5 {
            self.cycle_view(monitor, Direction::Right)
        } else {
            false
        }
    }

    fn title_click(&mut self, handle: WindowHandle, button: Button, at: (i32, i32)) -> bool {
        let Some(window) = self.clients.get(handle) else {
            return false;
        };
        let (floating, fixed) = (window.floating, window.fixed);
        self.focus(Some(handle));
        let monitor = self.active_monitor();
        if button == Button::Button1 {
            if floating || self.layout_is_floating(monitor) {
                self.restack(monitor);
            }
            self.start_move(handle, at)
        } else if button == Button::Button3 && !fixed {
            self.start_resize(handle)
        } else {
            true
        }
    }

    fn frame_click(
        &mut self,
        handle: WindowHandle,
        modmask: ModMask,
        button: Button,
        at: (i32, i32),
    ) -> bool {
        let Some(window) = self.clients.get(handle) else {
            return false;
        };
        let (floating, fixed, bastard) = (window.floating, window.fixed, window.bastard);
        let monitor = self.active_monitor();
        if !bastard {
            self.focus(Some(handle));
            self.restack(monitor);
        }
        if bastard || modmask.clean() != self.mousekey {
            self.actions
                .push_back(DisplayAction::ReplayClick(handle, button));
            return true;
        }

        let tiling = !self.layout_is_floating(monitor);
        if button == Button::Button1 {
            if tiling && !floating {
                self.command_handler(&Command::ToggleFloating);
            }
            self.start_move(handle, at)
        } else if button == Button::Button2 {
            if tiling && floating {
                self.command_handler(&Command::ToggleFloating)
            } else {
                self.command_handler(&Command::Zoom)
            }
        } else if button == Button::Button3 && !fixed {
            if tiling && !floating {
                self.command_handler(&Command::ToggleFloating);
            }
            self.start_resize(handle)
        } else {
            true
        }
    }

    fn start_move(&mut self, handle: WindowHandle, origin: (i32, i32)) -> bool {
        let monitor = self.owner_of_handle(handle);
        let Some(window) = self.clients.get_mut(handle) else {
            return false;
        };
        if window.bastard {
            return false;
        }
        window.maximized = false;
        self.mode = Mode::MovingWindow {
            handle,
            monitor,
            origin,
            start: window.geometry,
        };
        self.actions.push_back(DisplayAction::MoveToTop(handle));
        self.actions
            .push_back(DisplayAction::ReadyToMoveWindow(handle));
        true
    }

    fn start_resize(&mut self, handle: WindowHandle) -> bool {
        let monitor = self.owner_of_handle(handle);
        let Some(window) = self.clients.get_mut(handle) else {
            return false;
        };
        if window.bastard {
            return false;
        }
        window.maximized = false;
        self.mode = Mode::ResizingWindow {
            handle,
            monitor,
            start: window.geometry,
        };
        if let Some(corner) = self.resize_corner(handle) {
            self.actions
                .push_back(DisplayAction::MoveMouseOverPoint(corner));
        }
        self.actions
            .push_back(DisplayAction::ReadyToResizeWindow(handle));
        true
    }

    /// Pointer position at the bottom right corner of a frame, border included.
    fn resize_corner(&self, handle: WindowHandle) -> Option<(i32, i32)> {
        let w = self.clients.get(handle)?;
        let g = w.geometry;
        Some((
            g.x + g.w + 2 * w.border - 1,
            g.y + g.h + 2 * w.border - 1,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::Layout;
    use crate::models::{Screen, TagSet, Xyhw};

    fn single_screen() -> State {
        State::new_test(vec![Screen::new(Xyhw::new(0, 0, 1280, 800), "A")])
    }

    #[test]
    fn scrolling_the_root_window_cycles_tags() {
        let mut state = single_screen();
        state.mouse_combo_handler(ModMask::empty(), Button::Button5, ClickTarget::Root, 5, 5);
        assert_eq!(state.monitors[0].seltags, TagSet::single(1));
        state.mouse_combo_handler(ModMask::empty(), Button::Button4, ClickTarget::Root, 5, 5);
        assert_eq!(state.monitors[0].seltags, TagSet::single(0));
    }

    #[test]
    fn plain_clicks_focus_and_are_replayed() {
        let mut state = single_screen();
        let first = state.add_test_window(1, Xyhw::new(0, 0, 100, 100));
        state.add_test_window(2, Xyhw::new(0, 0, 100, 100));
        let target = ClickTarget::Frame(first);
        assert!(state.mouse_combo_handler(ModMask::empty(), Button::Button1, target, 900, 10));
        assert_eq!(state.focus_manager.window, Some(first));
        assert_eq!(
            state.actions.back(),
            Some(&DisplayAction::ReplayClick(first, Button::Button1))
        );
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn modifier_drag_floats_a_tiled_window() {
        let mut state = single_screen();
        let handle = state.add_test_window(1, Xyhw::new(0, 0, 100, 100));
        let target = ClickTarget::Frame(handle);
        state.mouse_combo_handler(ModMask::Alt, Button::Button1, target, 50, 50);
        assert!(state.clients.get(handle).unwrap().floating);
        assert!(matches!(state.mode, Mode::MovingWindow { handle: h, .. } if h == handle));
        assert!(state
            .actions
            .contains(&DisplayAction::ReadyToMoveWindow(handle)));
        assert!(state.button_release_handler());
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.actions.back(), Some(&DisplayAction::NormalMode));
    }

    #[test]
    fn middle_click_unfloats_or_zooms() {
        let mut state = single_screen();
        let first = state.add_test_window(1, Xyhw::new(0, 0, 100, 100));
        state.add_test_window(2, Xyhw::new(0, 0, 100, 100));
        let target = ClickTarget::Frame(first);
        state.mouse_combo_handler(ModMask::Alt, Button::Button2, target, 900, 10);
        assert_eq!(state.clients.handles()[0], first);

        if let Some(w) = state.clients.get_mut(first) {
            w.floating = true;
        }
        state.mouse_combo_handler(ModMask::Alt, Button::Button2, target, 900, 10);
        assert!(!state.clients.get(first).unwrap().floating);
    }

    #[test]
    fn resizing_warps_to_the_corner() {
        let mut state = single_screen();
        if let Some(tag) = state.tags.get_mut(0) {
            tag.layout = Layout::Floating;
        }
        let handle = state.add_test_window(1, Xyhw::new(10, 10, 100, 100));
        let target = ClickTarget::Title(handle);
        state.mouse_combo_handler(ModMask::empty(), Button::Button3, target, 20, 12);
        assert!(matches!(state.mode, Mode::ResizingWindow { .. }));
        assert!(state
            .actions
            .contains(&DisplayAction::MoveMouseOverPoint((109, 109))));
    }

    #[test]
    fn releasing_without_a_drag_does_nothing() {
        let mut state = single_screen();
        assert!(!state.button_release_handler());
    }
}
