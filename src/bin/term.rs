//! Terminal game runner.
//!
//! Crossterm input plus the framebuffer diff renderer. The event poll
//! timeout doubles as the frame throttle, so the loop sleeps whenever
//! there is nothing to do.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use quadfall::core::session::Renderer;
use quadfall::core::snapshot::FrameSnapshot;
use quadfall::core::{GameState, Ruleset};
use quadfall::input::{map_key, should_quit};
use quadfall::term::TermScreen;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let mut screen = TermScreen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TermScreen) -> Result<()> {
    let mut state = GameState::new(Ruleset::terminal());
    let mut snap = FrameSnapshot::default();
    let mut last = Instant::now();

    while !state.game_over() {
        state.snapshot_into(&mut snap);
        screen.present(&snap)?;

        let timeout = FRAME.saturating_sub(last.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key(key) {
                        state.apply(command);
                    }
                }
            }
        }

        let now = Instant::now();
        state.tick(now.duration_since(last).as_millis() as u64);
        last = now;
    }

    // Final frame with the overlay; hold until a key press dismisses it.
    state.snapshot_into(&mut snap);
    screen.present(&snap)?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
