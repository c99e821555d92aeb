//! `urchin` configuration, read from `config.toml`.

mod default;
mod keybind;

pub use keybind::{Keybind, Modifier};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use urchin_core::config::{Rule, TagDefaults};
use urchin_core::layouts::Layout;
use urchin_core::models::{FocusBehaviour, StrutMode, TagId};
use urchin_core::utils::modmask_lookup::{into_modmask, ModMask};
use urchin_core::{Command, XKeysym};
use xdg::BaseDirectories;

/// Overrides for the settings a tag starts with. Unset fields keep the defaults.
///
/// ```toml
/// [[tag_settings]]
/// tag = "2"
/// layout = "t"
/// mwfact = 0.5
/// ```
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct TagSetting {
    /// Name of the tag.
    pub tag: String,
    /// Layout symbol.
    pub layout: Option<String>,
    pub nmaster: Option<usize>,
    pub mwfact: Option<f32>,
    pub strut_mode: Option<StrutMode>,
}

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    pub modkey: String,
    pub mousekey: Option<Modifier>,
    pub tags: Vec<String>,
    pub tag_settings: Vec<TagSetting>,
    pub rules: Vec<Rule>,
    pub border_width: i32,
    pub title_height: i32,
    pub decorate_tiled: bool,
    pub hide_bastards: bool,
    pub focus_behaviour: FocusBehaviour,
    pub snap: i32,
    pub placement_seed: Option<u64>,
    pub keybind: Vec<Keybind>,
}

/// Load the configuration from `path`, or from `$XDG_CONFIG_HOME/urchin/config.toml`
/// without one. A file that does not exist gives the default configuration.
///
/// # Errors
///
/// Fails if the file exists but cannot be read or parsed.
pub fn load(path: Option<&Path>) -> Result<FileConfig> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => default_path()?,
    };
    match path {
        Some(path) if path.exists() => load_from_file(&path),
        _ => {
            tracing::debug!("Config file not found. Using default config.");
            Ok(FileConfig::default())
        }
    }
}

fn default_path() -> Result<Option<PathBuf>> {
    let dirs = BaseDirectories::with_prefix("urchin")?;
    Ok(dirs.find_config_file("config.toml"))
}

fn load_from_file(path: &Path) -> Result<FileConfig> {
    tracing::debug!("Config file '{}' found.", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("couldn't read {}", path.display()))?;
    let mut config: FileConfig = toml::from_str(&contents)
        .with_context(|| format!("couldn't parse {}", path.display()))?;
    config.drop_invalid_keybinds();
    Ok(config)
}

impl FileConfig {
    /// Remove the bindings that do not resolve, so key lookups never fail.
    fn drop_invalid_keybinds(&mut self) {
        let modkey = self.modkey.clone();
        self.keybind.retain(|bind| match bind.resolve(&modkey) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!("Ignoring key binding {:?}: {:#}", bind, err);
                false
            }
        });
    }

    fn tag_setting(&self, tag: TagId) -> Option<&TagSetting> {
        let name = self.tags.get(tag)?;
        self.tag_settings.iter().find(|s| &s.tag == name)
    }
}

impl urchin_core::Config for FileConfig {
    fn tag_names(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn tag_defaults(&self, tag: TagId) -> TagDefaults {
        let defaults = TagDefaults::default();
        let Some(setting) = self.tag_setting(tag) else {
            return defaults;
        };
        let layout = setting.layout.as_deref().and_then(|symbol| {
            symbol
                .parse::<Layout>()
                .map_err(|err| tracing::warn!("Tag {}: {}", setting.tag, err))
                .ok()
        });
        TagDefaults {
            layout: layout.unwrap_or(defaults.layout),
            nmaster: setting.nmaster.unwrap_or(defaults.nmaster),
            mwfact: setting.mwfact.unwrap_or(defaults.mwfact),
            strut_mode: setting.strut_mode.unwrap_or(defaults.strut_mode),
        }
    }

    fn rules(&self) -> Vec<Rule> {
        self.rules.clone()
    }

    fn border_width(&self) -> i32 {
        self.border_width
    }

    fn title_height(&self) -> i32 {
        self.title_height
    }

    fn decorate_tiled(&self) -> bool {
        self.decorate_tiled
    }

    fn hide_bastards(&self) -> bool {
        self.hide_bastards
    }

    fn focus_behaviour(&self) -> FocusBehaviour {
        self.focus_behaviour
    }

    fn snap(&self) -> i32 {
        self.snap
    }

    fn mousekey(&self) -> ModMask {
        let mousekey: Vec<String> = self.mousekey.iter().flatten().collect();
        into_modmask(&mousekey)
    }

    fn placement_seed(&self) -> Option<u64> {
        self.placement_seed
    }

    fn command_for_key(&self, modmask: ModMask, keysym: XKeysym) -> Option<Command> {
        self.keybind
            .iter()
            .filter_map(|bind| bind.resolve(&self.modkey).ok())
            .find(|(mask, key, _)| *mask == modmask && *key == keysym)
            .map(|(_, _, command)| command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use urchin_core::Config;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn a_missing_file_gives_the_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(Some(dir.path().join("config.toml").as_path())).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn defaults_bind_every_tag() {
        let config = FileConfig::default();
        assert_eq!(config.tag_names(), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(
            config.command_for_key(ModMask::Alt, 0x33),
            Some(Command::View(Some(2)))
        );
        assert_eq!(
            config.command_for_key(ModMask::Alt | ModMask::Shift, 0x31),
            Some(Command::Tag(Some(0)))
        );
        assert_eq!(config.mousekey(), ModMask::Alt);
        assert_eq!(config.command_for_key(ModMask::Super, 0x33), None);
    }

    #[test]
    fn files_override_the_defaults() {
        let file = write_config(
            r#"
            modkey = "Mod4"
            tags = ["web", "code", "chat"]
            border_width = 2
            focus_behaviour = "AllSloppy"

            [[tag_settings]]
            tag = "code"
            layout = "t"
            nmaster = 2
            strut_mode = "Off"

            [[rules]]
            prop = "Firefox"
            tags = "web"

            [[keybind]]
            command = "View"
            value = "3"
            modifier = ["modkey"]
            key = "c"

            [[keybind]]
            command = "View"
            value = "9000x"
            modifier = ["modkey"]
            key = "x"
            "#,
        );
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.tag_names(), vec!["web", "code", "chat"]);
        assert_eq!(config.border_width(), 2);
        assert_eq!(config.focus_behaviour(), FocusBehaviour::AllSloppy);
        assert_eq!(config.rules().len(), 1);

        let code = config.tag_defaults(1);
        assert_eq!(code.layout, Layout::Tile);
        assert_eq!(code.nmaster, 2);
        assert_eq!(code.strut_mode, StrutMode::Off);
        assert_eq!(config.tag_defaults(0), TagDefaults::default());

        // the broken binding is dropped, the good one resolves with Mod4
        assert_eq!(config.keybind.len(), 1);
        assert_eq!(
            config.command_for_key(ModMask::Super, 0x63),
            Some(Command::View(Some(2)))
        );
    }

    #[test]
    fn unknown_layout_symbols_keep_the_default() {
        let config = FileConfig {
            tag_settings: vec![TagSetting {
                tag: "1".to_owned(),
                layout: Some("q".to_owned()),
                ..TagSetting::default()
            }],
            ..FileConfig::default()
        };
        assert_eq!(config.tag_defaults(0).layout, Layout::default());
    }

    #[test]
    fn malformed_files_are_errors() {
        let file = write_config("tags = 3");
        assert!(load(Some(file.path())).is_err());
    }
}
