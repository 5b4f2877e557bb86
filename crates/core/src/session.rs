//! Front-end seams: rendering and input as capability traits.
//!
//! The engine never calls a renderer or reads a keyboard. Front ends
//! implement these two traits and run the loop themselves: poll a command,
//! apply it, tick, snapshot, present. Tests drive the same loop headless
//! with scripted inputs and a recording renderer.

use anyhow::Result;

use crate::snapshot::FrameSnapshot;
use crate::types::Command;

/// Paints one frame snapshot onto whatever surface the front end owns.
pub trait Renderer {
    fn present(&mut self, snapshot: &FrameSnapshot) -> Result<()>;
}

/// Non-blocking source of already-mapped player commands.
///
/// `poll` returns at most one command and must not wait for input; pacing
/// belongs to the front-end loop, not the input source.
pub trait InputSource {
    fn poll(&mut self) -> Result<Option<Command>>;
}
