use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Represents the state of modifier keys
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModMask: u16 {
        const Shift = 1;
        const Lock = 1 << 1;
        const Control = 1 << 2;
        /// Mod1
        const Alt = 1 << 3;
        /// Mod2
        const NumLock = 1 << 4;
        const Mod3 = 1 << 5;
        /// Mod4
        const Super = 1 << 6;
        const Mod5 = 1 << 7;
    }
}

bitflags! {
    /// Represents the mouse buttons
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Button: u8 {
        /// Main button (left click for right-handed)
        const Button1 = 1;
        /// Middle button (pressing the scroll wheel)
        const Button2 = 1 << 1;
        /// Secondary button (right click for right-handed)
        const Button3 = 1 << 2;
        /// Scroll wheel up
        const Button4 = 1 << 3;
        /// Scroll wheel down
        const Button5 = 1 << 4;
    }
}

impl ModMask {
    /// Drop the lock modifiers so bindings match regardless of caps or num lock.
    #[must_use]
    pub fn clean(self) -> Self {
        self - (Self::Lock | Self::NumLock)
    }
}

/// Build a mask out of modifier names as they appear in configuration files.
#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    keys.iter()
        .fold(ModMask::empty(), |mask, key| mask | into_mod(key))
        .clean()
}

#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "Shift" => ModMask::Shift,
        "Control" | "Ctrl" => ModMask::Control,
        "Mod1" | "Alt" => ModMask::Alt,
        "Mod3" => ModMask::Mod3,
        "Mod4" | "Super" => ModMask::Super,
        "Mod5" => ModMask::Mod5,
        _ => ModMask::empty(),
    }
}

// serde impls (derive is not working with the bitflags macro)

impl Serialize for ModMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for ModMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        u16::deserialize(deserializer).map(ModMask::from_bits_retain)
    }
}

impl Serialize for Button {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for Button {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        u8::deserialize(deserializer).map(Button::from_bits_retain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_modifiers_are_ignored() {
        let mask = ModMask::Super | ModMask::NumLock | ModMask::Lock;
        assert_eq!(mask.clean(), ModMask::Super);
    }

    #[test]
    fn names_build_a_clean_mask() {
        let keys = vec!["Mod4".to_owned(), "Shift".to_owned(), "Bogus".to_owned()];
        assert_eq!(into_modmask(&keys), ModMask::Super | ModMask::Shift);
    }

    #[test]
    fn masks_serialize_as_numbers() {
        let json = serde_json::to_string(&(ModMask::Alt | ModMask::Shift)).unwrap();
        assert_eq!(json, "9");
        let back: ModMask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ModMask::Alt | ModMask::Shift);
        let button: Button = serde_json::from_str("4").unwrap();
        assert_eq!(button, Button::Button3);
    }
}
