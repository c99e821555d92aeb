use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use urchin_core::layouts::Layout;
use urchin_core::{Command, Direction};

/// Command names as written in key bindings. TOML has no way to spell the core
/// `Command` enum with its arguments, so a binding names the command and carries
/// its argument as a string in `value`.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseCommand {
    SetLayout,
    SetMasterRatio,
    IncMasterCount,
    MoveResize,
    ToggleFloating,
    ToggleMaximize,
    ToggleTag,
    Tag,
    View,
    ToggleView,
    FocusView,
    ViewPrevious,
    CycleView,
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

impl BaseCommand {
    /// Build the core command. Tag indexes in `value` are counted from 1, the way
    /// tags are numbered on screen.
    ///
    /// # Errors
    ///
    /// Fails when `value` is missing or malformed for a command that needs it.
    pub fn with_value(self, value: &str) -> Result<Command> {
        let optional = (!value.is_empty()).then(|| value.to_owned());
        let command = match self {
            Self::SetLayout => {
                if let Some(symbol) = &optional {
                    Layout::from_str(symbol)
                        .context("could not parse layout for command SetLayout")?;
                }
                Command::SetLayout(optional)
            }
            Self::SetMasterRatio => {
                if let Some(ratio) = &optional {
                    f32::from_str(ratio.trim_start_matches('+'))
                        .context("invalid ratio for SetMasterRatio")?;
                }
                Command::SetMasterRatio(optional)
            }
            Self::IncMasterCount => Command::IncMasterCount(
                optional
                    .map(|v| i32::from_str(&v))
                    .transpose()
                    .context("invalid count for IncMasterCount")?,
            ),
            Self::MoveResize => move_resize(value)?,
            Self::ToggleFloating => Command::ToggleFloating,
            Self::ToggleMaximize => Command::ToggleMaximize,
            Self::ToggleTag => Command::ToggleTag(tag_index(value)?),
            Self::Tag => Command::Tag(optional.map(|v| tag_index(&v)).transpose()?),
            Self::View => Command::View(optional.map(|v| tag_index(&v)).transpose()?),
            Self::ToggleView => Command::ToggleView(tag_index(value)?),
            Self::FocusView => Command::FocusView(tag_index(value)?),
            Self::ViewPrevious => Command::ViewPrevious,
            Self::CycleView => match value {
                "left" | "Left" => Command::CycleView(Direction::Left),
                "right" | "Right" => Command::CycleView(Direction::Right),
                _ => bail!("CycleView needs a direction, left or right"),
            },
            Self::FocusNext => Command::FocusNext,
            Self::FocusPrevious => Command::FocusPrevious,
            Self::FocusNextMonitor => Command::FocusNextMonitor,
            Self::Zoom => Command::Zoom,
            Self::Iconify => Command::Iconify,
            Self::KillClient => Command::KillClient,
            Self::ToggleStruts => Command::ToggleStruts,
            Self::Quit => Command::Quit,
            Self::Restart => Command::Restart,
        };
        Ok(command)
    }
}

fn tag_index(value: &str) -> Result<usize> {
    let index = usize::from_str(value).context("invalid tag index")?;
    index.checked_sub(1).context("tags are numbered from 1")
}

/// `"dx dy dw dh"`, for example `"0 0 10 0"` to grow a window by 10 pixels.
fn move_resize(value: &str) -> Result<Command> {
    let steps = value
        .split_whitespace()
        .map(i32::from_str)
        .collect::<Result<Vec<_>, _>>()
        .context("invalid step for MoveResize")?;
    let &[dx, dy, dw, dh] = steps.as_slice() else {
        bail!("MoveResize needs four steps: dx dy dw dh");
    };
    Ok(Command::MoveResize { dx, dy, dw, dh })
}
