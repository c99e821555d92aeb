//! Objects (such as windows and monitors) the window manager reasons about.
mod client_list;
mod dock_area;
mod focus_manager;
mod manager;
mod mode;
mod monitor;
mod screen;
mod size_hints;
mod tag;
mod window;
mod window_change;
mod window_state;
mod window_type;
mod xyhw;

pub mod dto;

pub use client_list::ClientList;
pub use dock_area::{DockArea, Struts};
pub use focus_manager::{FocusBehaviour, FocusManager};
pub use manager::Manager;
pub use mode::Mode;
pub use monitor::Monitor;
pub use screen::{bounding_box, dedup_mirrors, Screen};
pub use size_hints::SizeHints;
pub use tag::{StrutMode, Tag, TagSet, Tags, MAX_TAGS};
pub use window::{Window, WindowHandle};
pub use window_change::WindowChange;
pub use window_state::WindowState;
pub use window_type::WindowType;
pub use xyhw::Xyhw;

pub type TagId = usize;
pub type MonitorId = usize;
