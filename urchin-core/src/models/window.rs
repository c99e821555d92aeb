//! Window Information
#![allow(clippy::module_name_repetitions)]

use super::DockArea;
use super::MonitorId;
use super::SizeHints;
use super::TagSet;
use super::WindowType;
use super::Xyhw;
use serde::{Deserialize, Serialize};

/// A backend agnostic handle to a window used to identify it.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct WindowHandle(pub u64);

/// Store Window information.
// We allow this as these flags are independent of each other.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Window {
    pub handle: WindowHandle,
    pub transient: Option<WindowHandle>,
    pub name: Option<String>,
    // Two strings that are within a XClassHint, kept separate for simpler comparing.
    pub res_name: Option<String>,
    pub res_class: Option<String>,
    pub r#type: WindowType,
    /// Frame geometry. The height includes the title bar.
    pub geometry: Xyhw,
    /// Last geometry the window had while floating.
    pub float_geometry: Xyhw,
    /// Geometry to return to when un-maximizing.
    pub revert: Option<Xyhw>,
    pub title_height: i32,
    pub border: i32,
    /// Border the window had before we managed it.
    pub old_border: i32,
    pub hints: SizeHints,
    pub strut: Option<DockArea>,
    pub tags: TagSet,
    /// Monitor that last laid the window out. Advisory only.
    pub monitor: Option<MonitorId>,
    pub floating: bool,
    pub fixed: bool,
    pub bastard: bool,
    pub maximized: bool,
    pub iconified: bool,
    pub focusable: bool,
    pub placed: bool,
    pub banned: bool,
    pub has_title: bool,
}

impl Window {
    #[must_use]
    pub fn new(handle: WindowHandle, name: Option<String>) -> Self {
        Self {
            handle,
            transient: None,
            name,
            res_name: None,
            res_class: None,
            r#type: WindowType::Normal,
            geometry: Xyhw::default(),
            float_geometry: Xyhw::default(),
            revert: None,
            title_height: 0,
            border: 0,
            old_border: 0,
            hints: SizeHints::default(),
            strut: None,
            tags: TagSet::empty(),
            monitor: None,
            floating: false,
            fixed: false,
            bastard: false,
            maximized: false,
            iconified: false,
            focusable: true,
            placed: false,
            banned: false,
            has_title: true,
        }
    }

    /// Whether the window carries any of the selected tags.
    #[must_use]
    pub const fn is_visible_in(&self, seltags: TagSet) -> bool {
        self.tags.intersects(seltags)
    }

    /// Windows that tiling layouts arrange.
    #[must_use]
    pub const fn is_tiled(&self) -> bool {
        !self.floating && !self.bastard && !self.iconified
    }

    /// Windows the user can cycle through and give focus to.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.bastard && !self.iconified
    }

    /// The string matched against window rules: `class:instance:title`.
    #[must_use]
    pub fn rule_subject(&self) -> String {
        format!(
            "{}:{}:{}",
            self.res_class.as_deref().unwrap_or_default(),
            self.res_name.as_deref().unwrap_or_default(),
            self.name.as_deref().unwrap_or_default()
        )
    }

    /// Move the window by an offset, including its saved geometries.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.geometry = self.geometry.translated(dx, dy);
        self.float_geometry = self.float_geometry.translated(dx, dy);
        if let Some(revert) = self.revert.as_mut() {
            *revert = revert.translated(dx, dy);
        }
    }

    /// Area the client itself gets inside the frame.
    #[must_use]
    pub const fn client_area(&self) -> Xyhw {
        Xyhw {
            x: 0,
            y: self.title_height,
            w: self.geometry.w,
            h: self.geometry.h - self.title_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_is_a_tag_intersection() {
        let mut window = Window::new(WindowHandle(1), None);
        window.tags = [1, 2].into_iter().collect();
        assert!(window.is_visible_in(TagSet::single(2)));
        assert!(!window.is_visible_in(TagSet::single(0)));
        assert!(!window.is_visible_in(TagSet::empty()));
    }

    #[test]
    fn rule_subject_joins_class_instance_and_title() {
        let mut window = Window::new(WindowHandle(1), Some("vim".to_owned()));
        window.res_class = Some("XTerm".to_owned());
        assert_eq!(window.rule_subject(), "XTerm::vim");
    }

    #[test]
    fn translate_moves_every_saved_geometry() {
        let mut window = Window::new(WindowHandle(1), None);
        window.geometry = Xyhw::new(10, 10, 100, 100);
        window.float_geometry = Xyhw::new(20, 20, 50, 50);
        window.revert = Some(Xyhw::new(0, 0, 5, 5));
        window.translate(1280, 0);
        assert_eq!(window.geometry.x, 1290);
        assert_eq!(window.float_geometry.x, 1300);
        assert_eq!(window.revert.map(|r| r.x), Some(1280));
    }

    #[test]
    fn iconified_and_bastard_windows_are_not_tiled() {
        let mut window = Window::new(WindowHandle(1), None);
        assert!(window.is_tiled());
        window.iconified = true;
        assert!(!window.is_tiled());
        window.iconified = false;
        window.bastard = true;
        assert!(!window.is_tiled());
    }
}
