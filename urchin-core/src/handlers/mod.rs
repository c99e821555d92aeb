mod arrange_handler;
pub mod command_handler;
pub mod display_event_handler;
mod focus_handler;
mod goto_tag_handler;
mod mouse_combo_handler;
mod screen_create_handler;
mod window_handler;
mod window_move_handler;
mod window_resize_handler;

use super::command::Command;
use super::display_action::DisplayAction;
use super::models::{Mode, Window, WindowChange, WindowHandle, Xyhw};
