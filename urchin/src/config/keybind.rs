use crate::utils::keysym::into_keysym;
use crate::BaseCommand;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use urchin_core::utils::modmask_lookup::{into_modmask, ModMask};
use urchin_core::{Command, XKeysym};

/// A key binding as written in `config.toml`.
///
/// ```toml
/// [[keybind]]
/// command = "View"
/// value = "2"
/// modifier = ["modkey"]
/// key = "2"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub key: String,
}

impl Keybind {
    pub fn new(modifier: &[&str], key: &str, command: BaseCommand, value: &str) -> Self {
        let modifier: Vec<String> = modifier.iter().map(|&m| m.to_owned()).collect();
        Self {
            command,
            value: value.to_owned(),
            modifier: Some(modifier.into()),
            key: key.to_owned(),
        }
    }

    /// Resolve the binding into what the core matches key presses against.
    /// The name `modkey` in the modifier list stands for the configured modifier key.
    ///
    /// # Errors
    ///
    /// Fails for unknown key names and for values the command cannot take.
    pub fn resolve(&self, modkey: &str) -> Result<(ModMask, XKeysym, Command)> {
        let modifiers: Vec<String> = self
            .modifier
            .iter()
            .flatten()
            .map(|m| if m == "modkey" { modkey.to_owned() } else { m })
            .collect();
        let keysym = into_keysym(&self.key)
            .with_context(|| format!("unknown key name {:?}", self.key))?;
        let command = self
            .command
            .with_value(&self.value)
            .with_context(|| format!("bad value for {:?}", self.command))?;
        Ok((into_modmask(&modifiers), keysym, command))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl IntoIterator for &Modifier {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let ms = match self {
            Modifier::Single(m) => vec![m.clone()],
            Modifier::List(ms) => ms.clone(),
        };
        ms.into_iter()
    }
}

impl From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{modifier}"),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}
