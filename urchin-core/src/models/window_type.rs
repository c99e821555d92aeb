use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowType {
    Desktop,
    Dock,
    Dialog,
    #[default]
    Normal,
}

impl WindowType {
    /// Panels and desktops are managed but never tiled or focused.
    #[must_use]
    pub const fn is_bastard(self) -> bool {
        matches!(self, Self::Desktop | Self::Dock)
    }

    /// Types that keep the size they ask for.
    #[must_use]
    pub const fn is_fixed_by_default(self) -> bool {
        matches!(self, Self::Desktop | Self::Dock | Self::Dialog)
    }
}
