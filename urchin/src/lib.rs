//! Configuration and replay driver for the urchin window manager core.
mod command;
mod config;
pub mod replay;
pub mod utils;

pub use command::BaseCommand;
pub use config::*;
