use crate::config::Config;
use crate::models::{MonitorId, WindowHandle};

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusBehaviour {
    /// Only clicks change focus.
    ClickTo,
    /// Entering a floating window, or any window under a floating layout, focuses it.
    #[default]
    SloppyFloat,
    /// Entering any window focuses it.
    AllSloppy,
    /// Entering any window focuses and raises it.
    SloppyRaise,
}

impl FocusBehaviour {
    pub fn is_clickto(self) -> bool {
        self == FocusBehaviour::ClickTo
    }
}

/// `FocusManager` stores which window and monitor have focus and where the pointer is.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FocusManager {
    pub window: Option<WindowHandle>,
    /// Monitor commands act on.
    pub monitor: MonitorId,
    /// Whether the pointer is on our screen at all.
    pub selscreen: bool,
    pub last_mouse_position: (i32, i32),
    // entries below are configuration variables and are never changed
    pub behaviour: FocusBehaviour,
}

impl FocusManager {
    pub fn new(config: &impl Config) -> Self {
        Self {
            window: None,
            monitor: 0,
            selscreen: true,
            last_mouse_position: (0, 0),
            behaviour: config.focus_behaviour(),
        }
    }
}
