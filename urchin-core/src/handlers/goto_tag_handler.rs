use crate::command::Direction;
use crate::display_action::DisplayAction;
use crate::models::{MonitorId, TagId, TagSet, WindowHandle};
use crate::state::State;

impl State {
    /// Show exactly `tag` on `monitor`. A monitor already showing the tag gets the old
    /// current tag of `monitor` in exchange.
    pub fn view(&mut self, monitor: MonitorId, tag: TagId) -> bool {
        if tag >= self.tags.len() {
            return false;
        }
        let Some(old_tag) = self.monitors.get(monitor).map(|m| m.curtag) else {
            return false;
        };
        if self.monitors[monitor].has_tag(tag) {
            return false;
        }
        let old_mode = self.tags.strut_mode(old_tag);

        let mut swapped = vec![];
        for (id, other) in self.monitors.iter_mut().enumerate() {
            if id != monitor && other.has_tag(tag) {
                other.surrender_tag(tag, old_tag);
                swapped.push(id);
            }
        }
        self.monitors[monitor].show_tag(tag);

        if old_mode != self.tags.strut_mode(tag) {
            self.update_geometry(monitor);
        }
        for id in &swapped {
            self.update_geometry(*id);
        }
        if swapped.is_empty() {
            self.arrange(Some(monitor));
        } else {
            self.arrange(None);
        }
        self.focus(None);
        true
    }

    /// Show every tag on `monitor`.
    pub fn view_all(&mut self, monitor: MonitorId) -> bool {
        let all = self.tags.full_set();
        let Some(m) = self.monitors.get_mut(monitor) else {
            return false;
        };
        if m.seltags == all {
            return false;
        }
        m.show_tags(all);
        self.update_geometry(monitor);
        self.arrange(None);
        self.focus(None);
        true
    }

    /// Add or remove `tag` from what `monitor` shows. Other monitors keep their tags.
    pub fn toggle_view(&mut self, monitor: MonitorId, tag: TagId) -> bool {
        if tag >= self.tags.len() {
            return false;
        }
        let Some(m) = self.monitors.get_mut(monitor) else {
            return false;
        };
        let old_tag = m.curtag;
        m.toggle_tag(tag);
        let new_tag = m.curtag;
        if self.tags.strut_mode(old_tag) != self.tags.strut_mode(new_tag) {
            self.update_geometry(monitor);
        }
        self.arrange(Some(monitor));
        self.focus(None);
        true
    }

    /// Go back to the tags `monitor` showed before.
    pub fn view_previous(&mut self, monitor: MonitorId) -> bool {
        let Some(m) = self.monitors.get_mut(monitor) else {
            return false;
        };
        let old_tag = m.curtag;
        m.swap_previous();
        let new_tag = m.curtag;
        if self.tags.strut_mode(old_tag) != self.tags.strut_mode(new_tag) {
            self.update_geometry(monitor);
        }
        self.arrange(None);
        self.focus(None);
        true
    }

    /// View the tag next to the first one shown. There is no wrapping.
    pub fn cycle_view(&mut self, monitor: MonitorId, direction: Direction) -> bool {
        let Some(first) = self.monitors.get(monitor).and_then(|m| m.seltags.first()) else {
            return false;
        };
        let target = match direction {
            Direction::Left => first.checked_sub(1),
            Direction::Right => Some(first + 1).filter(|t| *t < self.tags.len()),
        };
        target.is_some_and(|t| self.view(monitor, t))
    }

    /// Toggle `tag` into view and bring each of its windows forward.
    pub fn focus_view(&mut self, monitor: MonitorId, tag: TagId) -> bool {
        if !self.toggle_view(monitor, tag) {
            return false;
        }
        if !self.monitors.get(monitor).is_some_and(|m| m.has_tag(tag)) {
            return true;
        }
        let handles: Vec<WindowHandle> = self
            .clients
            .iter()
            .filter(|w| w.tags.contains(tag) && !w.bastard)
            .map(|w| w.handle)
            .collect();
        for h in handles {
            self.focus(Some(h));
            if let Some(w) = self.clients.get_mut(h) {
                w.placed = true;
            }
        }
        self.restack(monitor);
        true
    }

    /// Put a window on one tag, or on every tag with `None`.
    pub fn tag_window(&mut self, handle: WindowHandle, tag: Option<TagId>) -> bool {
        let tags = match tag {
            Some(t) if t < self.tags.len() => TagSet::single(t),
            Some(_) => return false,
            None => self.tags.full_set(),
        };
        let Some(window) = self.clients.get_mut(handle) else {
            return false;
        };
        window.tags = tags;
        self.arrange(None);
        self.focus(None);
        true
    }

    /// Flip one tag of a window. A window never ends up without tags.
    pub fn toggle_tag(&mut self, handle: WindowHandle, tag: TagId) -> bool {
        if tag >= self.tags.len() {
            return false;
        }
        let Some(window) = self.clients.get_mut(handle) else {
            return false;
        };
        window.tags.toggle(tag);
        if window.tags.is_empty() {
            window.tags.set(tag, true);
        }
        self.actions.push_back(DisplayAction::Redraw(handle));
        self.arrange(None);
        self.focus(None);
        true
    }
}
