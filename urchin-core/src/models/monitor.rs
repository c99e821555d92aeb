use crate::models::{Screen, StrutMode, Struts, TagId, TagSet, Window, Xyhw};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::MonitorId;

/// Information for one physical output.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Monitor {
    pub id: MonitorId,
    pub output: String,
    pub screen: Xyhw,
    work_area: Xyhw,
    pub struts: Struts,
    /// Tag whose settings (layout, master area, struts) this monitor uses.
    pub curtag: TagId,
    pub seltags: TagSet,
    pub prevtags: TagSet,
}

impl fmt::Debug for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Monitor {{ id: {}, curtag: {}, seltags: {:?}, x: {}, y: {} }}",
            self.id, self.curtag, self.seltags, self.screen.x, self.screen.y
        )
    }
}

impl Monitor {
    #[must_use]
    pub fn new(id: MonitorId, screen: &Screen, tag: TagId) -> Self {
        let seltags = TagSet::single(tag);
        Self {
            id,
            output: screen.output.clone(),
            screen: screen.bbox,
            work_area: screen.bbox,
            struts: Struts::default(),
            curtag: tag,
            seltags,
            prevtags: seltags,
        }
    }

    /// Screen minus the struts when they are shown, else the whole screen.
    #[must_use]
    pub const fn work_area(&self) -> Xyhw {
        self.work_area
    }

    /// Recompute the work area from the screen and the strut accumulators.
    pub fn update_geometry(&mut self, mode: StrutMode) {
        if mode != StrutMode::On {
            self.work_area = self.screen;
            return;
        }
        let s = self.struts;
        self.work_area = Xyhw {
            x: self.screen.x + s.left,
            y: self.screen.y + s.top,
            w: (self.screen.w - s.left - s.right).max(1),
            h: (self.screen.h - s.top - s.bottom).max(1),
        };
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.screen.owns_point(x, y)
    }

    #[must_use]
    pub const fn is_displaying(&self, window: &Window) -> bool {
        window.is_visible_in(self.seltags)
    }

    #[must_use]
    pub const fn has_tag(&self, tag: TagId) -> bool {
        self.seltags.contains(tag)
    }

    /// Show exactly one tag, remembering the previous selection.
    pub fn show_tag(&mut self, tag: TagId) {
        self.prevtags = self.seltags;
        self.seltags = TagSet::single(tag);
        self.curtag = tag;
    }

    /// Show every tag of `tags`, keeping `curtag` if it is among them.
    pub fn show_tags(&mut self, tags: TagSet) {
        if tags.is_empty() {
            return;
        }
        self.prevtags = self.seltags;
        self.seltags = tags;
        if !tags.contains(self.curtag) {
            self.curtag = tags.first().unwrap_or(self.curtag);
        }
    }

    /// Flip one tag of the selection. A selection is never left empty: clearing the
    /// last tag restores it.
    pub fn toggle_tag(&mut self, tag: TagId) {
        self.prevtags = self.seltags;
        self.seltags.toggle(tag);
        if self.seltags.is_empty() {
            self.seltags.set(tag, true);
        }
        if !self.seltags.contains(self.curtag) {
            self.curtag = self.seltags.first().unwrap_or(tag);
        }
    }

    /// Give up `tag` in exchange for `replacement`. Used when another monitor
    /// takes over a tag this one shows.
    pub fn surrender_tag(&mut self, tag: TagId, replacement: TagId) {
        self.seltags.set(tag, false);
        self.seltags.set(replacement, true);
        if self.curtag == tag {
            self.curtag = replacement;
        }
    }

    /// Go back to the previous selection.
    pub fn swap_previous(&mut self) {
        std::mem::swap(&mut self.seltags, &mut self.prevtags);
        if let Some(first) = self.seltags.first() {
            self.curtag = first;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor() -> Monitor {
        Monitor::new(0, &Screen::new(Xyhw::new(0, 0, 1280, 800), "A"), 0)
    }

    #[test]
    fn work_area_subtracts_struts_only_when_shown() {
        let mut m = monitor();
        m.struts.top = 30;
        m.update_geometry(StrutMode::On);
        assert_eq!(m.work_area(), Xyhw::new(0, 30, 1280, 770));
        m.update_geometry(StrutMode::Off);
        assert_eq!(m.work_area(), Xyhw::new(0, 0, 1280, 800));
        m.update_geometry(StrutMode::Hide);
        assert_eq!(m.work_area(), m.screen);
    }

    #[test]
    fn toggling_the_last_tag_off_restores_it() {
        let mut m = monitor();
        m.toggle_tag(0);
        assert_eq!(m.seltags, TagSet::single(0));
        assert_eq!(m.curtag, 0);
    }

    #[test]
    fn toggling_curtag_off_moves_curtag_to_a_selected_tag() {
        let mut m = monitor();
        m.toggle_tag(2);
        m.toggle_tag(0);
        assert_eq!(m.seltags, TagSet::single(2));
        assert_eq!(m.curtag, 2);
    }

    #[test]
    fn show_tag_remembers_the_previous_selection() {
        let mut m = monitor();
        m.show_tag(3);
        assert_eq!(m.prevtags, TagSet::single(0));
        m.swap_previous();
        assert_eq!(m.seltags, TagSet::single(0));
        assert_eq!(m.curtag, 0);
        assert_eq!(m.prevtags, TagSet::single(3));
    }

    #[test]
    fn surrender_tag_hands_over_curtag() {
        let mut m = monitor();
        m.surrender_tag(0, 4);
        assert_eq!(m.seltags, TagSet::single(4));
        assert_eq!(m.curtag, 4);
    }
}
