#![allow(clippy::wildcard_imports)]

use super::*;
use crate::config::CompiledRule;
use crate::display_event::NewWindow;
use crate::models::{MonitorId, WindowState, Xyhw};
use crate::state::State;

impl State {
    /// Start managing a window that asked to be mapped. `x` and `y` are the pointer
    /// position.
    pub fn window_created_handler(&mut self, new: NewWindow, x: i32, y: i32) -> bool {
        let handle = new.handle;
        if let Some(window) = self.clients.get(handle) {
            // a repeated map request
            let owner = self.owner_of(window);
            self.unban(handle);
            self.arrange(Some(owner));
            return true;
        }

        let mut window = self.classify(&new);
        let monitor = if window.bastard {
            self.monitor_at(new.geometry.x, new.geometry.y)
                .unwrap_or_else(|| self.active_monitor())
        } else {
            self.active_monitor()
        };
        let Some(m) = self.monitors.get(monitor) else {
            tracing::warn!("No monitor to manage {:?} on", handle);
            return false;
        };
        let (screen, area, seltags) = (m.screen, m.work_area(), m.seltags);
        if window.bastard || window.tags.is_empty() {
            window.tags = seltags;
        }

        let th = self.title_height_for(&window, monitor);
        let mut frame = Xyhw::new(
            new.geometry.x,
            new.geometry.y,
            new.geometry.w,
            new.geometry.h + th,
        );
        if new.geometry.x != 0 && new.geometry.y != 0 {
            window.placed = true;
        } else if !window.bastard && window.floating {
            frame.x = x - frame.w / 2;
            frame.y = y - frame.h / 2;
        }
        if !window.bastard {
            if frame.w == screen.w && frame.h == screen.h {
                frame.x = screen.x;
                frame.y = screen.y;
            } else {
                frame = clamp_into(frame, area);
            }
        }
        window.geometry = frame;
        window.float_geometry = frame;
        let (placed, border, strut) = (window.placed, window.border, window.strut.is_some());

        tracing::debug!("Managing {:?} on monitor {}", handle, monitor);
        self.actions
            .push_back(DisplayAction::AddedWindow(handle, border));
        self.clients.insert(window);
        self.resize_window(handle, monitor, frame, true);
        if let Some(w) = self.clients.get_mut(handle) {
            // the first geometry is a request, not a placement
            w.placed = placed;
        }
        if new.fullscreen {
            self.maximize(handle, monitor);
        }
        self.ban(handle);
        if strut {
            self.recompute_struts();
        }
        self.arrange(Some(monitor));
        self.focus(None);
        true
    }

    /// The client went away. Returns `true` if it was managed.
    pub fn window_destroyed_handler(&mut self, handle: WindowHandle) -> bool {
        self.unmanage(handle)
    }

    /// The client was reparented away from our frame by someone else.
    pub fn window_reparented_handler(&mut self, handle: WindowHandle) -> bool {
        self.unmanage(handle)
    }

    /// The client unmapped itself, unless we caused the unmap.
    pub fn window_unmap_handler(&mut self, handle: WindowHandle) -> bool {
        if self.suppress_notify.remove(&handle) {
            return false;
        }
        match self.clients.get(handle) {
            Some(w) if !w.iconified => {
                self.ban(handle);
                self.suppress_notify.remove(&handle);
                self.unmanage(handle)
            }
            _ => false,
        }
    }

    pub fn window_changed_handler(&mut self, change: WindowChange) -> bool {
        let handle = change.handle;
        let name_changed = change.name.is_some();
        let parent = change.transient.flatten();
        let strut_changed = change.strut.is_some();
        let Some(window) = self.clients.get_mut(handle) else {
            return false;
        };
        tracing::debug!("Window changed: {:?}", change);
        let changed = change.update(window);
        let (floating, bastard) = (window.floating, window.bastard);
        let owner = self.owner_of_handle(handle);

        if name_changed {
            self.actions.push_back(DisplayAction::Redraw(handle));
        }
        if let Some(parent) = parent {
            if !floating && self.clients.contains(parent) {
                if let Some(w) = self.clients.get_mut(handle) {
                    w.floating = true;
                }
                self.arrange(Some(owner));
            }
        }
        if strut_changed && bastard {
            self.recompute_struts();
            self.arrange(None);
        }
        changed
    }

    /// A client asked for a new geometry.
    pub fn configure_request_handler(
        &mut self,
        handle: WindowHandle,
        request: (Option<i32>, Option<i32>, Option<i32>, Option<i32>),
        border: Option<i32>,
    ) -> bool {
        let (x, y, w, h) = request;
        let Some(window) = self.clients.get_mut(handle) else {
            let xyhw = Xyhw::new(
                x.unwrap_or_default(),
                y.unwrap_or_default(),
                w.unwrap_or_default(),
                h.unwrap_or_default(),
            );
            self.actions
                .push_back(DisplayAction::ConfigureUnmanaged(handle, xyhw));
            return false;
        };
        window.maximized = false;
        if let Some(border) = border {
            window.border = border.max(0);
        }
        let monitor = self.owner_of_handle(handle);
        let Some(window) = self.clients.get(handle) else {
            return false;
        };
        if !(window.floating || window.fixed || self.layout_is_floating(monitor)) {
            let geometry = window.geometry;
            self.actions
                .push_back(DisplayAction::SendConfigure(handle, geometry));
            return false;
        }

        let th = window.title_height;
        let mut frame = window.geometry;
        frame.x = x.unwrap_or(frame.x);
        frame.y = y.unwrap_or(frame.y);
        frame.w = w.unwrap_or(frame.w);
        frame.h = h.map_or(frame.h, |h| h + th);
        if window.floating {
            if let Some(m) = self.monitors.get(monitor) {
                let (screen, area) = (m.screen, m.work_area());
                if frame.right() > area.x + screen.w {
                    frame.x = screen.x + screen.w / 2 - frame.w / 2;
                }
                if frame.bottom() > area.y + screen.h {
                    frame.y = screen.y + screen.h / 2 - frame.h / 2;
                }
            }
        }

        if self.is_visible(window, None) {
            self.resize_window(handle, monitor, frame, false);
            self.actions.push_back(DisplayAction::Redraw(handle));
        } else if let Some(window) = self.clients.get_mut(handle) {
            window.geometry = frame;
            window.float_geometry = frame;
        }
        true
    }

    /// Cover the screen of `monitor`, keeping the current geometry to come back to.
    pub(crate) fn maximize(&mut self, handle: WindowHandle, monitor: MonitorId) {
        let Some(screen) = self.monitors.get(monitor).map(|m| m.screen) else {
            return;
        };
        let Some(window) = self.clients.get_mut(handle) else {
            return;
        };
        if window.fixed {
            return;
        }
        window.maximized = true;
        window.revert = Some(window.geometry);
        let (b, th) = (window.border, window.title_height);
        // border and title end up outside the screen
        let frame = Xyhw::new(screen.x - b, screen.y - b - th, screen.w, screen.h + th);
        self.resize_window(handle, monitor, frame, false);
    }

    /// Stop managing a window.
    pub(crate) fn unmanage(&mut self, handle: WindowHandle) -> bool {
        let Some(window) = self.clients.get(handle) else {
            return false;
        };
        let owner = self.owner_of(window);
        let Some(window) = self.clients.remove(handle) else {
            return false;
        };
        tracing::debug!("Unmanaging {:?}", handle);
        self.suppress_notify.remove(&handle);
        self.actions
            .push_back(DisplayAction::SetState(handle, WindowState::Withdrawn));
        self.actions
            .push_back(DisplayAction::DestroyedWindow(handle, window.old_border));
        if self.mode.handle() == Some(handle) {
            self.mode = Mode::Normal;
            self.actions.push_back(DisplayAction::NormalMode);
        }
        if self.focus_manager.window == Some(handle) {
            self.focus_manager.window = None;
            self.focus(None);
        }
        if window.bastard {
            self.recompute_struts();
            self.arrange(None);
        } else {
            self.arrange(Some(owner));
        }
        true
    }

    pub(crate) fn owner_of_handle(&self, handle: WindowHandle) -> MonitorId {
        self.clients
            .get(handle)
            .map_or_else(|| self.active_monitor(), |w| self.owner_of(w))
    }

    /// Build the window record out of what the display server told us and the rules.
    fn classify(&self, new: &NewWindow) -> Window {
        let mut window = Window::new(new.handle, new.name.clone());
        window.res_name.clone_from(&new.res_name);
        window.res_class.clone_from(&new.res_class);
        window.r#type = new.r#type;
        window.transient = new.transient;
        window.hints = new.hints.sanitized();
        window.strut = new.strut;
        window.old_border = new.border;
        window.bastard = new.r#type.is_bastard();

        if window.bastard {
            window.floating = true;
            window.fixed = true;
            window.has_title = false;
            window.focusable = false;
            window.border = 0;
            window.old_border = 0;
            return window;
        }

        window.border = self.border_width;
        window.fixed = new.r#type.is_fixed_by_default() || window.hints.is_fixed();
        window.focusable = new.input_hint != Some(false);

        let parent = new.transient.and_then(|p| self.clients.get(p));
        if let Some(parent) = parent {
            window.tags = parent.tags;
        }
        let rules = CompiledRule::classify(&self.rules, &window.rule_subject(), &self.tags);
        if !rules.tags.is_empty() {
            window.tags = rules.tags;
        }
        if let Some(has_title) = rules.has_title {
            window.has_title = has_title;
        }
        window.floating = rules.floating.unwrap_or(false)
            || new.transient.is_some()
            || window.fixed;
        window
    }
}

/// Move a frame so it lies inside `area` where it fits.
fn clamp_into(mut frame: Xyhw, area: Xyhw) -> Xyhw {
    if frame.right() > area.right() {
        frame.x = area.right() - frame.w;
    }
    if frame.bottom() > area.bottom() {
        frame.y = area.bottom() - frame.h;
    }
    frame.x = frame.x.max(area.x);
    frame.y = frame.y.max(area.y);
    frame
}
