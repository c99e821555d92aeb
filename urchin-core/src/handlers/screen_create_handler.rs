use crate::models::{dedup_mirrors, Monitor, MonitorId, Screen};
use crate::state::State;

impl State {
    /// The set of outputs changed, or we learned about it for the first time.
    ///
    /// Returns `true` if changes need to be rendered.
    pub fn screens_changed_handler(&mut self, screens: Vec<Screen>) -> bool {
        let screens = dedup_mirrors(screens);
        if screens.is_empty() {
            tracing::warn!("Display server reported no outputs");
            return false;
        }
        let ntags = self.tags.len();
        let monitors: Vec<Monitor> = screens
            .iter()
            .enumerate()
            .map(|(id, screen)| {
                let mut monitor = Monitor::new(id, screen, if id < ntags { id } else { 0 });
                // a monitor that survives the change keeps what it showed
                if let Some(old) = self.monitors.get(id) {
                    monitor.curtag = old.curtag;
                    monitor.seltags = old.seltags;
                    monitor.prevtags = old.prevtags;
                }
                monitor
            })
            .collect();
        tracing::debug!("Outputs: {:?}", monitors);
        self.monitors = monitors;
        if self.focus_manager.monitor >= self.monitors.len() {
            self.focus_manager.monitor = 0;
        }

        self.update_root();
        self.recompute_struts();
        self.reset_owners();
        self.arrange(None);
        self.focus(None);
        true
    }

    /// Hand every window to the monitor that now shows it. Bastards belong to the
    /// monitor under their position.
    fn reset_owners(&mut self) {
        let owners: Vec<_> = self
            .clients
            .iter()
            .map(|w| {
                let owner: MonitorId = if w.bastard {
                    self.monitor_at(w.geometry.x, w.geometry.y).unwrap_or(0)
                } else {
                    self.owner_of(w)
                };
                (w.handle, owner)
            })
            .collect();
        for (handle, owner) in owners {
            if let Some(w) = self.clients.get_mut(handle) {
                w.monitor = Some(owner);
            }
        }
    }
}
