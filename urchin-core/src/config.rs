//! What the core needs from the user's configuration.
mod rule;

use crate::command::Command;
use crate::layouts::Layout;
use crate::models::{FocusBehaviour, StrutMode, TagId};
use crate::utils::modmask_lookup::ModMask;
use crate::XKeysym;
use serde::{Deserialize, Serialize};

pub use rule::{Classification, CompiledRule, Rule};

pub const DEFAULT_TAG_COUNT: usize = 5;
pub const DEFAULT_MWFACT: f32 = 0.6;
pub const DEFAULT_NMASTER: usize = 1;
pub const DEFAULT_BORDER_WIDTH: i32 = 1;
pub const DEFAULT_TITLE_HEIGHT: i32 = 12;
pub const DEFAULT_SNAP: i32 = 5;
pub const MIN_MWFACT: f32 = 0.1;
pub const MAX_MWFACT: f32 = 0.9;

/// Per-tag settings a tag starts with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TagDefaults {
    pub layout: Layout,
    pub nmaster: usize,
    pub mwfact: f32,
    pub strut_mode: StrutMode,
}

impl Default for TagDefaults {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            nmaster: DEFAULT_NMASTER,
            mwfact: DEFAULT_MWFACT,
            strut_mode: StrutMode::On,
        }
    }
}

impl TagDefaults {
    /// Clamp values a user could get wrong into their valid ranges.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            nmaster: self.nmaster.max(1),
            mwfact: if self.mwfact.is_finite() {
                self.mwfact.clamp(MIN_MWFACT, MAX_MWFACT)
            } else {
                DEFAULT_MWFACT
            },
            ..self
        }
    }
}

pub trait Config {
    fn tag_names(&self) -> Vec<String>;

    fn tag_defaults(&self, _tag: TagId) -> TagDefaults {
        TagDefaults::default()
    }

    /// Window rules in the order they are tried.
    fn rules(&self) -> Vec<Rule>;

    fn border_width(&self) -> i32 {
        DEFAULT_BORDER_WIDTH
    }

    fn title_height(&self) -> i32 {
        DEFAULT_TITLE_HEIGHT
    }

    /// Show titles on tiled windows too.
    fn decorate_tiled(&self) -> bool {
        false
    }

    /// Hiding struts also hides the panels that declare them.
    fn hide_bastards(&self) -> bool {
        false
    }

    fn focus_behaviour(&self) -> FocusBehaviour;

    /// Distance in pixels at which dragged windows snap to the work area edges.
    fn snap(&self) -> i32 {
        DEFAULT_SNAP
    }

    /// Modifier that turns clicks on a frame into move/resize/zoom.
    fn mousekey(&self) -> ModMask;

    /// Seed for the placement jitter. `None` seeds from the OS.
    fn placement_seed(&self) -> Option<u64> {
        None
    }

    fn command_for_key(&self, modmask: ModMask, keysym: XKeysym) -> Option<Command>;
}
