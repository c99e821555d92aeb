use crate::models::{MonitorId, WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// Dispatch state. Anything but `Normal` is an interactive drag that only accepts a
/// restricted set of events until the button is released.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    MovingWindow {
        handle: WindowHandle,
        monitor: MonitorId,
        /// Pointer position when the drag started.
        origin: (i32, i32),
        /// Frame geometry when the drag started.
        start: Xyhw,
    },
    ResizingWindow {
        handle: WindowHandle,
        monitor: MonitorId,
        start: Xyhw,
    },
    #[default]
    Normal,
}

impl Mode {
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        !matches!(self, Self::Normal)
    }

    #[must_use]
    pub const fn handle(&self) -> Option<WindowHandle> {
        match self {
            Self::MovingWindow { handle, .. } | Self::ResizingWindow { handle, .. } => {
                Some(*handle)
            }
            Self::Normal => None,
        }
    }
}
