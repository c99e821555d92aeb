#![allow(clippy::wildcard_imports)]

use super::*;
use crate::layouts::{LayoutContext, Placement};
use crate::models::{bounding_box, MonitorId, StrutMode, Struts, WindowState, Xyhw};
use crate::state::State;

impl State {
    /// Bring one monitor, or all of them, in line with the current state.
    pub fn arrange(&mut self, monitor: Option<MonitorId>) {
        let clients = &self.clients;
        self.suppress_notify
            .retain(|h| clients.get(*h).is_some_and(|w| w.banned));
        match monitor {
            Some(m) => arrange_work(self, m),
            None => (0..self.monitors.len()).for_each(|m| arrange_work(self, m)),
        }
    }

    /// Move and resize a window, constrained by its size hints when `size_hints`
    /// is set. Nothing is sent when nothing changes.
    pub fn resize_window(
        &mut self,
        handle: WindowHandle,
        monitor: MonitorId,
        xyhw: Xyhw,
        size_hints: bool,
    ) {
        let Some(screen) = self.monitors.get(monitor).map(|m| m.screen) else {
            return;
        };
        let layout_floating = self.layout_is_floating(monitor);
        let Some(window) = self.clients.get(handle) else {
            return;
        };
        let th = self.title_height_for(window, monitor);

        let Xyhw { mut x, mut y, w, h } = xyhw;
        let (w, h) = if size_hints {
            window.hints.constrain(w, h, th)
        } else {
            (w, h)
        };
        let (w, h) = (w.max(1), h.max(1));
        let border = window.border;
        if x > screen.right() {
            x = screen.right() - w - 2 * border;
        }
        if y > screen.bottom() {
            y = screen.bottom() - h - 2 * border;
        }
        let frame = Xyhw::new(x, y, w, h);

        let Some(window) = self.clients.get_mut(handle) else {
            return;
        };
        let title_changed = window.title_height != th;
        window.title_height = th;
        if window.geometry == frame && window.monitor == Some(monitor) && !title_changed {
            return;
        }
        if window.floating || layout_floating {
            window.float_geometry = frame;
            window.placed = true;
        }
        window.geometry = frame;
        window.monitor = Some(monitor);
        self.actions.push_back(DisplayAction::MoveResize {
            handle,
            frame,
            title_height: th,
            border,
        });
    }

    /// Hide a window from the screen.
    pub fn ban(&mut self, handle: WindowHandle) {
        let Some(window) = self.clients.get_mut(handle) else {
            return;
        };
        if window.banned {
            return;
        }
        window.banned = true;
        self.actions
            .push_back(DisplayAction::SetState(handle, WindowState::Iconic));
        self.actions.push_back(DisplayAction::Unmap(handle));
        self.suppress_notify.insert(handle);
    }

    pub fn unban(&mut self, handle: WindowHandle) {
        let Some(window) = self.clients.get_mut(handle) else {
            return;
        };
        if !window.banned {
            return;
        }
        window.banned = false;
        let floating = window.floating;
        self.actions.push_back(DisplayAction::Map(handle));
        self.actions
            .push_back(DisplayAction::SetState(handle, WindowState::Normal));
        if floating {
            self.actions.push_back(DisplayAction::Redraw(handle));
        }
    }

    /// Rebuild the strut accumulators of every monitor from the bastards' reservations
    /// and recompute the work areas.
    pub fn recompute_struts(&mut self) {
        let docks: Vec<_> = self
            .clients
            .iter()
            .filter(|w| w.bastard)
            .filter_map(|w| w.strut)
            .collect();
        let root = self.root;
        for monitor in &mut self.monitors {
            let mut struts = Struts::default();
            for dock in &docks {
                struts.merge_max(dock.insets_for(&monitor.screen, &root));
            }
            monitor.struts = struts;
        }
        for m in 0..self.monitors.len() {
            self.update_geometry(m);
        }
    }

    /// Recompute the bounding box of all monitors.
    pub(crate) fn update_root(&mut self) {
        let screens: Vec<_> = self
            .monitors
            .iter()
            .map(|m| crate::models::Screen::new(m.screen, &m.output))
            .collect();
        self.root = bounding_box(&screens);
    }
}

fn arrange_work(state: &mut State, monitor: MonitorId) {
    let Some(seltags) = state.monitors.get(monitor).map(|m| m.seltags) else {
        return;
    };
    sync_bastards(state, monitor, seltags);
    adopt_windows(state, monitor);

    let tiling = !state.layout_is_floating(monitor);
    let placements = layout_work(state, monitor);
    for p in placements {
        state.resize_window(p.handle, monitor, p.xyhw, p.size_hints);
        let Some(w) = state.clients.get_mut(p.handle) else {
            continue;
        };
        if let Some(placed) = p.placed {
            w.placed = placed;
        }
        if tiling && !w.floating {
            w.maximized = false;
        }
    }

    state.restack(monitor);
    show_hide_work(state, monitor);
}

/// Bastards follow the tags of the monitor they sit on.
fn sync_bastards(state: &mut State, monitor: MonitorId, seltags: crate::models::TagSet) {
    for w in state.clients.iter_mut() {
        if w.bastard && w.monitor == Some(monitor) {
            w.tags = seltags;
        }
    }
}

/// Take over windows that this monitor shows but whose owner no longer does. Floating
/// and placed windows travel with the tag to the new screen.
fn adopt_windows(state: &mut State, monitor: MonitorId) {
    let Some(target) = state.monitors.get(monitor).map(|m| m.screen) else {
        return;
    };
    let adopted: Vec<(WindowHandle, Option<Xyhw>)> = state
        .clients
        .iter()
        .filter(|w| !w.bastard && state.is_visible(w, Some(monitor)))
        .filter(|w| match w.monitor {
            Some(owner) => owner != monitor && !state.is_visible(w, Some(owner)),
            None => true,
        })
        .map(|w| {
            let from = w.monitor.and_then(|o| state.monitors.get(o)).map(|m| m.screen);
            (w.handle, from)
        })
        .collect();
    for (handle, from) in adopted {
        let Some(w) = state.clients.get_mut(handle) else {
            continue;
        };
        if let Some(from) = from {
            if w.floating || w.placed {
                w.translate(target.x - from.x, target.y - from.y);
            }
        }
        w.monitor = Some(monitor);
    }
}

fn layout_work(state: &mut State, monitor: MonitorId) -> Vec<Placement> {
    let Some(m) = state.monitors.get(monitor) else {
        return vec![];
    };
    let Some(tag) = state.tags.get(m.curtag) else {
        return vec![];
    };
    let ctx = LayoutContext {
        screen: m.screen,
        work_area: m.work_area(),
        tag,
        title_height: state.title_height,
    };
    let windows: Vec<&Window> = state
        .clients
        .iter()
        .filter(|w| {
            !w.iconified && !w.bastard && w.monitor == Some(monitor) && m.is_displaying(w)
        })
        .collect();
    if windows.is_empty() {
        return vec![];
    }
    tag.layout.arrange(&ctx, &windows, &mut state.rng)
}

/// Unban everything showable before banning the rest, so swapping tags between
/// monitors never leaves a moment where both are empty.
fn show_hide_work(state: &mut State, monitor: MonitorId) {
    let strut_mode = state.strut_mode(monitor);
    let owned: Vec<(WindowHandle, bool, bool)> = state
        .clients
        .iter_stack()
        .filter(|w| w.monitor == Some(monitor))
        .map(|w| {
            let visible = state.is_visible(w, Some(monitor));
            (w.handle, w.bastard, visible && !w.iconified)
        })
        .collect();

    for (handle, bastard, showable) in &owned {
        let show = if *bastard {
            strut_mode != StrutMode::Hide
        } else {
            *showable
        };
        if show {
            state.unban(*handle);
            if *bastard {
                set_iconified(state, *handle, false);
            }
        }
    }
    for (handle, bastard, showable) in &owned {
        let hide = if *bastard {
            strut_mode == StrutMode::Hide
        } else {
            !*showable
        };
        if hide {
            state.ban(*handle);
            if *bastard {
                set_iconified(state, *handle, true);
            }
        }
    }
}

fn set_iconified(state: &mut State, handle: WindowHandle, value: bool) {
    if let Some(w) = state.clients.get_mut(handle) {
        w.iconified = value;
    }
}
