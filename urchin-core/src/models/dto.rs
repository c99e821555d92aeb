//! Serialisable snapshot of the manager for external state readers.
use crate::layouts::Layout;
use crate::models::{TagSet, WindowHandle, Xyhw};
use crate::state::State;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Viewport {
    pub output: String,
    /// Labels of the selected tags.
    pub tags: Vec<String>,
    pub screen: Xyhw,
    pub work_area: Xyhw,
    pub layout: Layout,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientState {
    pub handle: WindowHandle,
    pub name: Option<String>,
    pub tags: Vec<String>,
    pub geometry: Xyhw,
    pub floating: bool,
    pub maximized: bool,
    pub iconified: bool,
    pub visible: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ManagerState {
    pub window_title: Option<String>,
    pub desktop_names: Vec<String>,
    pub viewports: Vec<Viewport>,
    /// Index of the monitor commands act on.
    pub active_viewport: usize,
    /// Tags at least one client is on.
    pub working_tags: Vec<String>,
    /// Clients in registry order.
    pub clients: Vec<ClientState>,
}

impl From<&State> for ManagerState {
    fn from(state: &State) -> Self {
        let labels = |set: TagSet| -> Vec<String> {
            set.iter()
                .filter_map(|id| state.tags.get(id).map(|t| t.label.clone()))
                .collect()
        };
        let viewports = state
            .monitors
            .iter()
            .map(|m| Viewport {
                output: m.output.clone(),
                tags: labels(m.seltags),
                screen: m.screen,
                work_area: m.work_area(),
                layout: state.tags.layout(m.curtag),
            })
            .collect();
        let working_tags = state
            .tags
            .all()
            .iter()
            .filter(|tag| state.clients.iter().any(|w| w.tags.contains(tag.id)))
            .map(|t| t.label.clone())
            .collect();
        let clients = state
            .clients
            .iter()
            .map(|w| ClientState {
                handle: w.handle,
                name: w.name.clone(),
                tags: labels(w.tags),
                geometry: w.geometry,
                floating: w.floating,
                maximized: w.maximized,
                iconified: w.iconified,
                visible: state.is_visible(w, None),
            })
            .collect();
        Self {
            window_title: state.focused().and_then(|w| w.name.clone()),
            desktop_names: state.tags.all().iter().map(|t| t.label.clone()).collect(),
            viewports,
            active_viewport: state.active_monitor(),
            working_tags,
            clients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Screen;

    #[test]
    fn snapshot_describes_monitors_and_clients() {
        let mut state = State::new_test(vec![
            Screen::new(Xyhw::new(0, 0, 1280, 800), "A"),
            Screen::new(Xyhw::new(1280, 0, 1280, 800), "B"),
        ]);
        let handle = state.add_test_window(1, Xyhw::new(0, 0, 100, 100));
        let snapshot = ManagerState::from(&state);
        assert_eq!(snapshot.desktop_names, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(snapshot.viewports.len(), 2);
        assert_eq!(snapshot.viewports[1].tags, vec!["2"]);
        assert_eq!(snapshot.viewports[0].layout, Layout::Tile);
        assert_eq!(snapshot.working_tags, vec!["1"]);
        assert_eq!(snapshot.clients[0].handle, handle);
        assert!(snapshot.clients[0].visible);
    }

    #[test]
    fn snapshot_survives_json() {
        let mut state = State::new_test(vec![Screen::new(Xyhw::new(0, 0, 1280, 800), "A")]);
        state.add_test_window(1, Xyhw::new(0, 0, 100, 100));
        let snapshot = ManagerState::from(&state);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ManagerState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
