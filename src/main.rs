//! Windowed game runner (default binary).
//!
//! One frame per display refresh: poll the keyboard, feed elapsed time to
//! the engine, snapshot, draw. After a top-out the final frame stays up
//! until any key dismisses it.

use macroquad::prelude::*;

use quadfall::core::snapshot::FrameSnapshot;
use quadfall::core::{GameState, Ruleset};
use quadfall::types::Command;
use quadfall::window::{draw_frame, poll_pressed, window_conf};

#[macroquad::main(window_conf)]
async fn main() {
    let mut state = GameState::new(Ruleset::windowed());
    let mut snap = FrameSnapshot::default();
    let mut last_ms = elapsed_ms();

    while !state.game_over() {
        if let Some(command) = poll_pressed() {
            if command == Command::Quit {
                return;
            }
            state.apply(command);
        }

        let now = elapsed_ms();
        state.tick(now.saturating_sub(last_ms));
        last_ms = now;

        state.snapshot_into(&mut snap);
        draw_frame(&snap);
        next_frame().await;
    }

    // Hold the final frame, overlay included, until a key dismisses it.
    state.snapshot_into(&mut snap);
    loop {
        draw_frame(&snap);
        if get_last_key_pressed().is_some() {
            return;
        }
        next_frame().await;
    }
}

/// Milliseconds since program start.
fn elapsed_ms() -> u64 {
    (get_time() * 1000.0) as u64
}
