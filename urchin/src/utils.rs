//! Pieces of the binary that are not configuration.
pub mod keysym;
pub mod log;
