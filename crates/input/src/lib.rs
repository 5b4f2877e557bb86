//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Command`] values.
//! Independent of the renderer: the terminal front end polls events itself
//! and only uses this crate to translate them.

pub mod map;

pub use quadfall_types as types;

pub use map::{map_key, should_quit};
