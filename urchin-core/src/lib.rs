//! Placement and visibility core of a tiling/floating window manager.
// We deny clippy pedantic lints, primarily to keep code as correct as possible.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. Geometry is `i32` throughout and layouts divide it by window counts.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
mod command;
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod layouts;
pub mod models;
pub mod state;
pub mod utils;

/// A keysym as the display server reports it.
pub type XKeysym = u32;

pub use command::{Command, Direction};
pub use config::Config;
pub use display_action::{BorderColor, DisplayAction};
pub use display_event::{ClickTarget, DisplayEvent, NewWindow};
pub use display_servers::DisplayServer;
pub use event_loop::ExitReason;
pub use models::dto::ManagerState;
pub use models::Manager;
pub use models::Mode;
pub use models::Window;
pub use state::State;
pub use utils::modmask_lookup::{Button, ModMask};
