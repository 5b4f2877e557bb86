//! Keyboard mapping for the windowed front end.

use macroquad::prelude::*;

use crate::types::Command;

/// Map this frame's key presses to a game command.
///
/// Edge-triggered: a held key fires once. Call this once per frame; the
/// pressed-state flags stay set for the whole frame, so polling in a loop
/// would report the same key again.
pub fn poll_pressed() -> Option<Command> {
    if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
        return Some(Command::MoveLeft);
    }
    if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
        return Some(Command::MoveRight);
    }
    if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
        return Some(Command::SoftDrop);
    }
    if is_key_pressed(KeyCode::Up)
        || is_key_pressed(KeyCode::W)
        || is_key_pressed(KeyCode::Space)
    {
        return Some(Command::Rotate);
    }
    if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
        return Some(Command::Quit);
    }
    None
}
