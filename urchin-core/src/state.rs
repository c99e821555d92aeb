//! Everything the window manager knows, in one place.

use crate::config::{CompiledRule, Config};
use crate::display_action::DisplayAction;
use crate::display_event::DisplayEvent;
use crate::event_loop::ExitReason;
use crate::layouts::Layout;
use crate::models::{
    ClientList, FocusManager, Mode, Monitor, MonitorId, StrutMode, Tags, Window, WindowHandle,
    Xyhw,
};
use crate::utils::modmask_lookup::ModMask;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashSet, VecDeque};

pub struct State {
    pub clients: ClientList,
    pub monitors: Vec<Monitor>,
    /// Bounding box of all monitors.
    pub root: Xyhw,
    pub tags: Tags,
    pub focus_manager: FocusManager,
    pub mode: Mode,
    pub actions: VecDeque<DisplayAction>,
    /// Events that arrived during a drag, replayed once it ends.
    pub(crate) deferred: VecDeque<DisplayEvent>,
    /// Windows whose next unmap notification we caused ourselves.
    pub(crate) suppress_notify: HashSet<WindowHandle>,
    pub(crate) rules: Vec<CompiledRule>,
    pub(crate) rng: StdRng,
    pub border_width: i32,
    pub title_height: i32,
    pub decorate_tiled: bool,
    pub hide_bastards: bool,
    pub snap: i32,
    pub mousekey: ModMask,
    pub exit: Option<ExitReason>,
}

impl State {
    pub(crate) fn new(config: &impl Config) -> Self {
        let rng = config
            .placement_seed()
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            clients: ClientList::default(),
            monitors: vec![],
            root: Xyhw::default(),
            tags: Tags::new(config),
            focus_manager: FocusManager::new(config),
            mode: Mode::default(),
            actions: VecDeque::new(),
            deferred: VecDeque::new(),
            suppress_notify: HashSet::new(),
            rules: CompiledRule::compile_all(&config.rules()),
            rng,
            border_width: config.border_width().max(0),
            title_height: config.title_height().max(0),
            decorate_tiled: config.decorate_tiled(),
            hide_bastards: config.hide_bastards(),
            snap: config.snap().max(0),
            mousekey: config.mousekey().clean(),
            exit: None,
        }
    }

    /// The monitor commands act on.
    #[must_use]
    pub fn active_monitor(&self) -> MonitorId {
        if self.focus_manager.monitor < self.monitors.len() {
            self.focus_manager.monitor
        } else {
            0
        }
    }

    #[must_use]
    pub fn monitor_at(&self, x: i32, y: i32) -> Option<MonitorId> {
        self.monitors.iter().position(|m| m.contains_point(x, y))
    }

    /// With a monitor, whether the monitor shows the window. Without one, whether
    /// any monitor does.
    #[must_use]
    pub fn is_visible(&self, window: &Window, monitor: Option<MonitorId>) -> bool {
        match monitor {
            Some(id) => self.monitors.get(id).is_some_and(|m| m.is_displaying(window)),
            None => self.monitors.iter().any(|m| m.is_displaying(window)),
        }
    }

    /// Monitor responsible for laying out `window`: the one that last did, if it
    /// still shows the window, else the first one that shows it.
    #[must_use]
    pub fn owner_of(&self, window: &Window) -> MonitorId {
        if let Some(id) = window.monitor {
            if self.is_visible(window, Some(id)) {
                return id;
            }
        }
        self.monitors
            .iter()
            .position(|m| m.is_displaying(window))
            .unwrap_or_else(|| self.active_monitor())
    }

    #[must_use]
    pub fn layout(&self, monitor: MonitorId) -> Layout {
        self.monitors
            .get(monitor)
            .map(|m| self.tags.layout(m.curtag))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn layout_is_floating(&self, monitor: MonitorId) -> bool {
        self.layout(monitor).is_floating()
    }

    #[must_use]
    pub fn strut_mode(&self, monitor: MonitorId) -> StrutMode {
        self.monitors
            .get(monitor)
            .map(|m| self.tags.strut_mode(m.curtag))
            .unwrap_or_default()
    }

    /// Title height a window gets when laid out on `monitor`.
    #[must_use]
    pub fn title_height_for(&self, window: &Window, monitor: MonitorId) -> i32 {
        let shown = window.floating || self.decorate_tiled || self.layout_is_floating(monitor);
        if window.has_title && shown {
            self.title_height
        } else {
            0
        }
    }

    #[must_use]
    pub fn focused(&self) -> Option<&Window> {
        self.focus_manager
            .window
            .and_then(|h| self.clients.get(h))
    }

    /// Recompute the work area of a monitor from its struts.
    pub fn update_geometry(&mut self, monitor: MonitorId) {
        let mode = self.strut_mode(monitor);
        if let Some(m) = self.monitors.get_mut(monitor) {
            m.update_geometry(mode);
        }
    }
}

#[cfg(test)]
impl State {
    pub fn new_test(screens: Vec<crate::models::Screen>) -> Self {
        let mut state = Self::new(&crate::config::tests::TestConfig::default());
        state.screens_changed_handler(screens);
        state
    }

    /// Manage a plain window that asked for `geometry`.
    pub fn add_test_window(&mut self, id: u64, geometry: Xyhw) -> WindowHandle {
        let handle = WindowHandle(id);
        let window = crate::display_event::NewWindow {
            handle,
            geometry,
            ..Default::default()
        };
        self.window_created_handler(window, 0, 0);
        handle
    }
}
