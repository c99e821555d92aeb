use crate::models::TagId;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Left,
    Right,
}

/// Everything a key or button binding can ask the window manager to do.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum Command {
    /// Select a layout by symbol, or cycle to the next one.
    SetLayout(Option<String>),
    /// `"+0.05"` and `"-0.05"` adjust, `"0.5"` sets, `None` resets.
    SetMasterRatio(Option<String>),
    /// Add to the master count, or reset it with `None`.
    IncMasterCount(Option<i32>),
    MoveResize {
        dx: i32,
        dy: i32,
        dw: i32,
        dh: i32,
    },
    ToggleFloating,
    ToggleMaximize,
    ToggleTag(TagId),
    /// Put the focused window on one tag, or on all of them.
    Tag(Option<TagId>),
    /// Show one tag, or all of them.
    View(Option<TagId>),
    ToggleView(TagId),
    FocusView(TagId),
    ViewPrevious,
    CycleView(Direction),
    FocusNext,
    FocusPrevious,
    FocusNextMonitor,
    Zoom,
    Iconify,
    KillClient,
    ToggleStruts,
    Quit,
    Restart,
}
