use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::dto::ManagerState;
use crate::state::State;

/// Maintains current program state.
pub struct Manager<C, SERVER> {
    pub state: State,
    pub config: C,
    pub display_server: SERVER,
}

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: DisplayServer,
{
    pub fn new(config: C, display_server: SERVER) -> Self {
        Self {
            state: State::new(&config),
            config,
            display_server,
        }
    }

    /// Snapshot of the state for external readers.
    #[must_use]
    pub fn manager_state(&self) -> ManagerState {
        ManagerState::from(&self.state)
    }
}

#[cfg(test)]
impl Manager<crate::config::tests::TestConfig, crate::display_servers::MockDisplayServer> {
    pub fn new_test(screens: Vec<crate::models::Screen>) -> Self {
        let mut manager = Self::new(
            crate::config::tests::TestConfig::default(),
            crate::display_servers::MockDisplayServer::default(),
        );
        manager.state.screens_changed_handler(screens);
        manager
    }
}
