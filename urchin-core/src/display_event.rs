use serde::{Deserialize, Serialize};

use crate::errors::ProtocolError;
use crate::models::{DockArea, Screen, SizeHints, WindowChange, WindowHandle, WindowType, Xyhw};
use crate::utils::modmask_lookup::{Button, ModMask};
use crate::{Command, XKeysym};

/// Part of the screen a button was pressed on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Root,
    /// The frame around a client, or the client itself.
    Frame(WindowHandle),
    Title(WindowHandle),
}

/// Everything the display server knows about a window that asked to be mapped.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct NewWindow {
    pub handle: WindowHandle,
    pub name: Option<String>,
    pub res_name: Option<String>,
    pub res_class: Option<String>,
    pub r#type: WindowType,
    pub transient: Option<WindowHandle>,
    /// Geometry the client asked for, without any decoration.
    pub geometry: Xyhw,
    /// Border the window had before we managed it.
    pub border: i32,
    pub hints: SizeHints,
    /// `false` when the input hint says the client never takes focus.
    pub input_hint: Option<bool>,
    pub strut: Option<DockArea>,
    /// The client asked for fullscreen before being mapped.
    pub fullscreen: bool,
}

/// Events the display server feeds the window manager.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum DisplayEvent {
    /// A window asked to be mapped. Carries the pointer position.
    WindowCreate(NewWindow, i32, i32),
    WindowDestroy(WindowHandle),
    /// A managed window was reparented away from our frame.
    WindowReparented(WindowHandle),
    WindowUnmap(WindowHandle),
    WindowChange(WindowChange),
    ConfigureRequest {
        handle: WindowHandle,
        x: Option<i32>,
        y: Option<i32>,
        w: Option<i32>,
        h: Option<i32>,
        border: Option<i32>,
    },
    MouseCombo {
        modmask: ModMask,
        button: Button,
        target: ClickTarget,
        x: i32,
        y: i32,
    },
    ButtonRelease,
    KeyCombo(ModMask, XKeysym),
    /// Pointer motion in root coordinates.
    Motion(i32, i32),
    /// The pointer entered a frame, or the root window with `None`.
    WindowEnter(Option<WindowHandle>, i32, i32),
    /// The pointer left for another screen.
    LeaveScreen,
    Expose(WindowHandle),
    MappingChanged,
    ScreensChanged(Vec<Screen>),
    SendCommand(Command),
    ProtocolError(ProtocolError),
}

impl DisplayEvent {
    /// Events still handled while a window is being moved or resized.
    #[must_use]
    pub const fn passes_drag(&self) -> bool {
        matches!(
            self,
            Self::Motion(..)
                | Self::ButtonRelease
                | Self::Expose(_)
                | Self::WindowCreate(..)
                | Self::ConfigureRequest { .. }
                // errors arrive out of band
                | Self::ProtocolError(_)
        )
    }
}
