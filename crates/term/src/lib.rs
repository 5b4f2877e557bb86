//! Terminal front end rendering.
//!
//! Renders into a plain framebuffer and flushes it with diffed updates
//! rather than going through a widget toolkit.
//!
//! Goals:
//! - Keep `core` free of any terminal knowledge
//! - Make layout decisions unit-testable (the view is pure cell pushing)
//! - Allow precise control over aspect ratio (2 columns per board cell)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use quadfall_core as core;
pub use quadfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::TermScreen;
