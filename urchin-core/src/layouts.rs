//! Layouts turn the visible windows of one monitor into target rectangles. They are
//! pure: they read windows and hand back placements, the orchestrator applies them.
mod bstack;
mod floating;
mod ifloating;
mod monocle;
mod tile;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::models::{Tag, Window, WindowHandle, Xyhw};

/// Where a layout wants a window to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub handle: WindowHandle,
    pub xyhw: Xyhw,
    /// Whether the client's size hints apply.
    pub size_hints: bool,
    /// New value of the window's `placed` flag, if the layout decides it.
    pub placed: Option<bool>,
}

impl Placement {
    const fn new(handle: WindowHandle, xyhw: Xyhw, size_hints: bool) -> Self {
        Self {
            handle,
            xyhw,
            size_hints,
            placed: None,
        }
    }
}

/// What a layout gets to look at besides the windows.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a> {
    pub screen: Xyhw,
    pub work_area: Xyhw,
    pub tag: &'a Tag,
    /// Height of a title bar, for windows that have one.
    pub title_height: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Floating with automatic placement of new windows.
    #[default]
    IFloating,
    Tile,
    Monocle,
    BottomStack,
    Floating,
}

pub const LAYOUTS: [Layout; 5] = [
    Layout::IFloating,
    Layout::Tile,
    Layout::Monocle,
    Layout::BottomStack,
    Layout::Floating,
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Could not parse layout: {0}")]
pub struct ParseLayoutError(String);

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LAYOUTS
            .iter()
            .find(|l| l.symbol() == s)
            .copied()
            .ok_or_else(|| ParseLayoutError(s.to_owned()))
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Layout {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::IFloating => "i",
            Self::Tile => "t",
            Self::Monocle => "m",
            Self::BottomStack => "b",
            Self::Floating => "f",
        }
    }

    /// Layouts under which every window behaves as floating.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Floating | Self::IFloating)
    }

    /// Layouts with a master area, the ones `mwfact`, `nmaster` and zoom apply to.
    #[must_use]
    pub const fn has_master_area(self) -> bool {
        matches!(self, Self::Tile | Self::BottomStack)
    }

    #[must_use]
    pub fn next(self) -> Self {
        let index = LAYOUTS.iter().position(|l| *l == self).unwrap_or_default();
        LAYOUTS[(index + 1) % LAYOUTS.len()]
    }

    /// Compute placements for `windows`: the visible, non-iconified windows of a
    /// monitor in registry order. Each layout picks the ones it handles.
    pub fn arrange<R: Rng>(
        self,
        ctx: &LayoutContext,
        windows: &[&Window],
        rng: &mut R,
    ) -> Vec<Placement> {
        match self {
            Self::Tile => tile::update(ctx, &tiled(windows)),
            Self::BottomStack => bstack::update(ctx, &tiled(windows)),
            Self::Monocle => monocle::update(ctx, windows),
            Self::Floating => floating::update(windows),
            Self::IFloating => ifloating::update(ctx, windows, rng),
        }
    }
}

fn tiled<'a>(windows: &[&'a Window]) -> Vec<&'a Window> {
    windows.iter().copied().filter(|w| w.is_tiled()).collect()
}

/// Split `total` into `count` parts starting at `start`. The last part absorbs the
/// rounding remainder so the parts always add up to `total`.
fn split(start: i32, total: i32, count: usize) -> Vec<(i32, i32)> {
    if count == 0 {
        return vec![];
    }
    let step = total / count as i32;
    (0..count)
        .map(|i| {
            let offset = step * i as i32;
            let len = if i + 1 == count { total - offset } else { step };
            (start + offset, len)
        })
        .collect()
}

/// Stack `count` rectangles on top of each other inside `area`.
fn split_rows(area: Xyhw, count: usize) -> Vec<Xyhw> {
    split(area.y, area.h, count)
        .into_iter()
        .map(|(y, h)| Xyhw::new(area.x, y, area.w, h))
        .collect()
}

/// Put `count` rectangles side by side inside `area`.
fn split_columns(area: Xyhw, count: usize) -> Vec<Xyhw> {
    split(area.x, area.w, count)
        .into_iter()
        .map(|(x, w)| Xyhw::new(x, area.y, w, area.h))
        .collect()
}
