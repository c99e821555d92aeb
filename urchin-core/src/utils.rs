//! Small shared pieces.
pub mod modmask_lookup;
