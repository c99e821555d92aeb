#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::BorderColor;
use crate::models::{FocusBehaviour, MonitorId, WindowState};
use crate::state::State;

impl State {
    /// Focus a window. With `None`, or a window that cannot take focus on the active
    /// monitor, the most recently focused candidate is picked instead.
    pub fn focus(&mut self, handle: Option<WindowHandle>) {
        let monitor = self.active_monitor();
        let target = match handle {
            Some(h) if self.can_focus(h, monitor) => Some(h),
            None if !self.focus_manager.selscreen => None,
            _ => self
                .clients
                .iter_stack()
                .find(|w| w.is_selectable() && self.is_visible(w, Some(monitor)))
                .map(|w| w.handle),
        };

        let previous = self.focus_manager.window;
        if previous == target && target.map_or(true, |h| self.is_settled(h)) {
            return;
        }
        if let Some(old) = previous.filter(|old| Some(*old) != target) {
            if self.clients.contains(old) {
                self.actions.push_back(DisplayAction::GrabButtons(old, false));
                self.actions
                    .push_back(DisplayAction::SetBorderColor(old, BorderColor::Normal));
                self.actions.push_back(DisplayAction::Redraw(old));
            }
        }
        if let Some(h) = target {
            if let Some(w) = self.clients.get_mut(h) {
                w.iconified = false;
            }
            self.clients.promote(h);
            self.actions.push_back(DisplayAction::GrabButtons(h, true));
            self.unban(h);
        }
        self.focus_manager.window = target;
        tracing::debug!("Focus moved to {:?}", target);

        if !self.focus_manager.selscreen {
            return;
        }
        match target.and_then(|h| self.clients.get(h)) {
            Some(w) => {
                let (h, focusable) = (w.handle, w.focusable);
                self.actions
                    .push_back(DisplayAction::SetState(h, WindowState::Normal));
                if focusable {
                    self.actions.push_back(DisplayAction::SetInputFocus(Some(h)));
                }
                self.actions
                    .push_back(DisplayAction::SetBorderColor(h, BorderColor::Focused));
                self.actions.push_back(DisplayAction::Redraw(h));
            }
            None => self.actions.push_back(DisplayAction::SetInputFocus(None)),
        }
    }

    /// Focus the next selectable window in list order, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus_relative(false);
    }

    pub fn focus_previous(&mut self) {
        self.focus_relative(true);
    }

    fn focus_relative(&mut self, backwards: bool) {
        let Some(current) = self.focus_manager.window else {
            return;
        };
        let monitor = self.active_monitor();
        let mut order: Vec<WindowHandle> = self.clients.handles().to_vec();
        if backwards {
            order.reverse();
        }
        let Some(index) = order.iter().position(|h| *h == current) else {
            return;
        };
        let next = order[index + 1..]
            .iter()
            .chain(order[..index].iter())
            .copied()
            .find(|h| {
                self.clients
                    .get(*h)
                    .is_some_and(|w| w.is_selectable() && self.is_visible(w, Some(monitor)))
            });
        if let Some(h) = next {
            self.focus(Some(h));
            self.restack(monitor);
        }
    }

    /// Stack the windows of a monitor: bastards on top, then floating windows, then
    /// tiled ones, each group in focus order. Under a floating layout, or with a
    /// floating window focused, only the focused window is raised.
    pub fn restack(&mut self, monitor: MonitorId) {
        let Some(focused) = self.focused() else {
            return;
        };
        if self.layout_is_floating(monitor) || focused.floating {
            let h = focused.handle;
            self.actions.push_back(DisplayAction::MoveToTop(h));
            return;
        }
        let visible: Vec<&Window> = self
            .clients
            .iter_stack()
            .filter(|w| !w.iconified && self.is_visible(w, Some(monitor)))
            .collect();
        if visible.len() <= 1 {
            return;
        }
        let bastards = visible.iter().filter(|w| w.bastard);
        let floating = visible.iter().filter(|w| !w.bastard && w.floating);
        let tiled = visible.iter().filter(|w| !w.bastard && !w.floating);
        let order: Vec<WindowHandle> = bastards.chain(floating).chain(tiled).map(|w| w.handle).collect();
        self.actions.push_back(DisplayAction::SetWindowOrder(order));
    }

    /// The pointer entered a frame, or the root window with `None`.
    pub fn window_enter_handler(&mut self, handle: Option<WindowHandle>, x: i32, y: i32) -> bool {
        self.focus_manager.last_mouse_position = (x, y);
        let Some(handle) = handle else {
            self.focus_manager.selscreen = true;
            if let Some(m) = self.monitor_at(x, y) {
                self.focus_manager.monitor = m;
            }
            self.focus(None);
            return true;
        };
        let Some(window) = self.clients.get(handle) else {
            return false;
        };
        let (bastard, floating) = (window.bastard, window.floating);
        if let Some(m) = self.monitor_at(x, y) {
            self.focus_manager.monitor = m;
        }
        let monitor = self.active_monitor();
        if !self.focused().is_some_and(|w| self.is_visible(w, Some(monitor))) {
            self.focus(Some(handle));
        }
        if bastard {
            self.actions.push_back(DisplayAction::GrabButtons(handle, true));
            return true;
        }
        match self.focus_manager.behaviour {
            FocusBehaviour::ClickTo => {}
            FocusBehaviour::SloppyFloat => {
                if floating || self.layout_is_floating(monitor) {
                    self.focus(Some(handle));
                }
            }
            FocusBehaviour::AllSloppy => self.focus(Some(handle)),
            FocusBehaviour::SloppyRaise => {
                self.focus(Some(handle));
                self.restack(monitor);
            }
        }
        true
    }

    /// The pointer left for another screen.
    pub fn leave_screen_handler(&mut self) -> bool {
        self.focus_manager.selscreen = false;
        self.focus(None);
        true
    }

    fn can_focus(&self, handle: WindowHandle, monitor: MonitorId) -> bool {
        self.clients
            .get(handle)
            .is_some_and(|w| !w.bastard && self.is_visible(w, Some(monitor)))
    }

    /// A focused window that needs no further work to show as focused.
    fn is_settled(&self, handle: WindowHandle) -> bool {
        self.clients
            .get(handle)
            .is_some_and(|w| !w.iconified && !w.banned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Screen, Xyhw};

    fn state_with_windows(count: u64) -> State {
        let mut state = State::new_test(vec![Screen::new(Xyhw::new(0, 0, 1280, 800), "A")]);
        for id in 1..=count {
            state.add_test_window(id, Xyhw::new(0, 0, 100, 100));
        }
        state
    }

    #[test]
    fn new_windows_take_focus() {
        let state = state_with_windows(2);
        assert_eq!(state.focus_manager.window, Some(WindowHandle(2)));
        assert_eq!(state.clients.stack()[0], WindowHandle(2));
    }

    #[test]
    fn focusing_the_focused_window_does_nothing() {
        let mut state = state_with_windows(2);
        state.actions.clear();
        state.focus(Some(WindowHandle(2)));
        assert!(state.actions.is_empty());
    }

    #[test]
    fn focus_moves_the_border_and_input() {
        let mut state = state_with_windows(2);
        state.actions.clear();
        state.focus(Some(WindowHandle(1)));
        assert_eq!(state.focus_manager.window, Some(WindowHandle(1)));
        assert!(state.actions.contains(&DisplayAction::SetBorderColor(
            WindowHandle(2),
            BorderColor::Normal
        )));
        assert!(state
            .actions
            .contains(&DisplayAction::SetInputFocus(Some(WindowHandle(1)))));
        assert_eq!(state.clients.stack()[0], WindowHandle(1));
    }

    #[test]
    fn invisible_targets_fall_back_to_the_stack() {
        let mut state = state_with_windows(2);
        if let Some(w) = state.clients.get_mut(WindowHandle(1)) {
            w.tags = crate::models::TagSet::single(3);
        }
        state.focus(Some(WindowHandle(1)));
        assert_eq!(state.focus_manager.window, Some(WindowHandle(2)));
    }

    #[test]
    fn focus_next_wraps_and_skips_iconified_windows() {
        let mut state = state_with_windows(3);
        // list order is 3, 2, 1
        if let Some(w) = state.clients.get_mut(WindowHandle(2)) {
            w.iconified = true;
        }
        state.focus_next();
        assert_eq!(state.focus_manager.window, Some(WindowHandle(1)));
        state.focus_next();
        assert_eq!(state.focus_manager.window, Some(WindowHandle(3)));
        state.focus_previous();
        assert_eq!(state.focus_manager.window, Some(WindowHandle(1)));
    }

    #[test]
    fn tiled_stacking_puts_floating_windows_above() {
        let mut state = state_with_windows(3);
        if let Some(w) = state.clients.get_mut(WindowHandle(1)) {
            w.floating = true;
        }
        state.actions.clear();
        state.restack(0);
        assert_eq!(
            state.actions.back(),
            Some(&DisplayAction::SetWindowOrder(vec![
                WindowHandle(1),
                WindowHandle(3),
                WindowHandle(2)
            ]))
        );
    }

    #[test]
    fn leaving_the_screen_unfocuses() {
        let mut state = state_with_windows(1);
        state.leave_screen_handler();
        assert_eq!(state.focus_manager.window, None);
        assert!(!state.focus_manager.selscreen);
        state.window_enter_handler(None, 10, 10);
        assert_eq!(state.focus_manager.window, Some(WindowHandle(1)));
    }
}
