use crate::models::WindowHandle;
use crate::models::WindowState;
use crate::models::Xyhw;
use crate::utils::modmask_lookup::Button;
use serde::{Deserialize, Serialize};

/// Border color of a frame.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderColor {
    Normal,
    Focused,
}

/// These are responses from the window manager.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction {
    /// Move and resize the frame of a window. The client area is derived from
    /// the frame by removing the title bar.
    MoveResize {
        handle: WindowHandle,
        frame: Xyhw,
        title_height: i32,
        border: i32,
    },

    /// Sets the "z-index" order of the windows.
    /// First in the array is top most.
    SetWindowOrder(Vec<WindowHandle>),

    /// Raises a given window.
    MoveToTop(WindowHandle),

    Map(WindowHandle),
    Unmap(WindowHandle),

    /// Give input focus to a window, or to the root window with `None`.
    SetInputFocus(Option<WindowHandle>),

    SetBorderColor(WindowHandle, BorderColor),

    /// Change the protocol level state of a window.
    SetState(WindowHandle, WindowState),

    /// Nicely ask a window if it would please close at its convenience.
    KillWindow(WindowHandle),

    /// Get triggered after a new window is discovered and we are managing it.
    /// Carries the initial border width.
    AddedWindow(WindowHandle, i32),

    /// Tell the display server we no longer care about this window. The old
    /// border width is restored.
    DestroyedWindow(WindowHandle, i32),

    /// Grab buttons on a window. Focused windows only get the modifier bindings.
    GrabButtons(WindowHandle, bool),

    /// Let a click through to the client it was meant for.
    ReplayClick(WindowHandle, Button),

    /// Tell the display server we are ready to move this window.
    ReadyToMoveWindow(WindowHandle),

    /// Tell the display server we are ready to resize this window.
    ReadyToResizeWindow(WindowHandle),

    /// Return to normal mode after moving or resizing.
    NormalMode,

    /// Makes sure the mouse is over a given point.
    MoveMouseOverPoint((i32, i32)),

    /// Tell a client its geometry without changing it.
    SendConfigure(WindowHandle, Xyhw),

    /// Pass a configure request of a window we do not manage through.
    ConfigureUnmanaged(WindowHandle, Xyhw),

    /// The keyboard mapping changed, key grabs need to be redone.
    ReloadKeyGrabs,

    /// Redraw the title bar of a window.
    Redraw(WindowHandle),
}
