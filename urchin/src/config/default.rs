use super::{FileConfig, Keybind, Modifier};
use crate::BaseCommand;
use urchin_core::config::{
    DEFAULT_BORDER_WIDTH, DEFAULT_SNAP, DEFAULT_TAG_COUNT, DEFAULT_TITLE_HEIGHT,
};
use urchin_core::models::FocusBehaviour;

impl Default for FileConfig {
    fn default() -> Self {
        let mut keybind = vec![
            Keybind::new(&["modkey"], "j", BaseCommand::FocusNext, ""),
            Keybind::new(&["modkey"], "k", BaseCommand::FocusPrevious, ""),
            Keybind::new(&["modkey"], "Return", BaseCommand::Zoom, ""),
            Keybind::new(&["modkey"], "space", BaseCommand::SetLayout, ""),
            Keybind::new(&["modkey"], "h", BaseCommand::SetMasterRatio, "-0.05"),
            Keybind::new(&["modkey"], "l", BaseCommand::SetMasterRatio, "+0.05"),
            Keybind::new(&["modkey", "Shift"], "i", BaseCommand::IncMasterCount, "1"),
            Keybind::new(&["modkey", "Shift"], "d", BaseCommand::IncMasterCount, "-1"),
            Keybind::new(&["modkey"], "f", BaseCommand::ToggleFloating, ""),
            Keybind::new(&["modkey"], "m", BaseCommand::ToggleMaximize, ""),
            Keybind::new(&["modkey"], "n", BaseCommand::Iconify, ""),
            Keybind::new(&["modkey"], "b", BaseCommand::ToggleStruts, ""),
            Keybind::new(&["modkey"], "Tab", BaseCommand::ViewPrevious, ""),
            Keybind::new(&["modkey"], "Left", BaseCommand::CycleView, "left"),
            Keybind::new(&["modkey"], "Right", BaseCommand::CycleView, "right"),
            Keybind::new(&["modkey"], "o", BaseCommand::FocusNextMonitor, ""),
            Keybind::new(&["modkey"], "0", BaseCommand::View, ""),
            Keybind::new(&["modkey", "Shift"], "c", BaseCommand::KillClient, ""),
            Keybind::new(&["modkey", "Shift"], "q", BaseCommand::Quit, ""),
            Keybind::new(&["modkey", "Control"], "r", BaseCommand::Restart, ""),
        ];
        for tag in 1..=DEFAULT_TAG_COUNT {
            let key = tag.to_string();
            keybind.extend([
                Keybind::new(&["modkey"], &key, BaseCommand::View, &key),
                Keybind::new(&["modkey", "Shift"], &key, BaseCommand::Tag, &key),
                Keybind::new(&["modkey", "Control"], &key, BaseCommand::ToggleView, &key),
                Keybind::new(
                    &["modkey", "Control", "Shift"],
                    &key,
                    BaseCommand::ToggleTag,
                    &key,
                ),
            ]);
        }

        Self {
            modkey: "Mod1".to_owned(),
            mousekey: Some(Modifier::from("Mod1")),
            tags: (1..=DEFAULT_TAG_COUNT).map(|t| t.to_string()).collect(),
            tag_settings: vec![],
            rules: vec![],
            border_width: DEFAULT_BORDER_WIDTH,
            title_height: DEFAULT_TITLE_HEIGHT,
            decorate_tiled: false,
            hide_bastards: false,
            focus_behaviour: FocusBehaviour::default(),
            snap: DEFAULT_SNAP,
            placement_seed: None,
            keybind,
        }
    }
}
