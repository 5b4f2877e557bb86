//! Windowed front end rendering and input.
//!
//! Immediate-mode drawing through macroquad: the whole frame is repainted
//! from the current snapshot every iteration, so there is no retained
//! scene state to keep in sync with the engine.

pub mod input;
pub mod view;

pub use quadfall_core as core;
pub use quadfall_types as types;

pub use input::poll_pressed;
pub use view::{draw_frame, window_conf, BLOCK_SIZE, SIDE_PANEL};
