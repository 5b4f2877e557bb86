//! End to end gameplay through the public facade.

use std::collections::VecDeque;

use anyhow::Result;
use quadfall::core::{FrameSnapshot, GameState, InputSource, Renderer, Ruleset, Spawner};
use quadfall::types::{Command, Offset, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Hunts the seed space for a game whose first piece has the wanted kind.
fn game_with_first_piece(rules: Ruleset, kind: PieceKind) -> GameState {
    (0..1000)
        .map(|seed| GameState::with_spawner(rules, Spawner::with_seed(seed)))
        .find(|state| state.active().kind == kind)
        .expect("piece kind not drawn in 1000 seeds")
}

#[test]
fn test_square_falls_to_the_floor_and_locks() {
    let mut state = game_with_first_piece(Ruleset::windowed(), PieceKind::O);
    assert_eq!(state.offset(), Offset::new(0, 4));
    let color = state.active().color.get();

    // Eighteen expiries walk the square from row 0 down to row 18, where
    // it rests on the floor.
    for step in 1..=18 {
        state.tick(501);
        assert_eq!(state.offset().row, step);
    }
    assert!(!state.game_over());
    assert_eq!(state.snapshot().board, [[0u8; BOARD_WIDTH]; BOARD_HEIGHT]);

    // The next expiry finds the floor below and locks rows 18-19.
    state.tick(501);
    let snap = state.snapshot();
    for (row, col) in [(18, 4), (18, 5), (19, 4), (19, 5)] {
        assert_eq!(snap.board[row][col], color, "block at ({row}, {col})");
    }
    assert_eq!(snap.lines, 0);
    assert_eq!(snap.score, 0);

    // The replacement piece starts back at the spawn row.
    assert_eq!(state.offset().row, 0);
    assert!(!state.game_over());
}

#[test]
fn test_stacked_spawns_end_the_game() {
    let mut state = GameState::with_spawner(Ruleset::windowed(), Spawner::with_seed(12345));

    // Lock every piece where it spawns. The well fills from the top, so
    // a replacement piece soon has nowhere to go.
    let mut locks = 0;
    while !state.game_over() {
        state.lock_piece();
        locks += 1;
        assert!(locks < 50, "game should end long before 50 spawn locks");
    }

    // A dead game ignores input.
    let before = state.snapshot();
    assert!(!state.apply(Command::MoveLeft));
    assert!(!state.apply(Command::Rotate));
    assert!(!state.apply(Command::SoftDrop));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_gravity_rollout_reaches_game_over() {
    let mut state = GameState::with_spawner(Ruleset::terminal(), Spawner::with_seed(777));
    let mut prev_score = 0;
    let mut prev_lines = 0;

    // No input at all: gravity alone must still finish the game.
    let mut ticks = 0;
    while !state.game_over() {
        state.tick(501);
        assert!(state.score() >= prev_score);
        assert!(state.lines() >= prev_lines);
        prev_score = state.score();
        prev_lines = state.lines();
        ticks += 1;
        assert!(ticks < 100_000, "rollout did not terminate");
    }

    let snap = state.snapshot();
    assert!(snap.game_over);
    assert!(snap.board.iter().any(|row| row.iter().any(|&cell| cell != 0)));
}

#[test]
fn test_identical_seeds_and_scripts_stay_in_lockstep() {
    let script = [
        Command::MoveLeft,
        Command::Rotate,
        Command::MoveRight,
        Command::MoveRight,
        Command::SoftDrop,
        Command::Rotate,
        Command::MoveLeft,
        Command::SoftDrop,
    ];

    let mut a = GameState::with_spawner(Ruleset::windowed(), Spawner::with_seed(9000));
    let mut b = GameState::with_spawner(Ruleset::windowed(), Spawner::with_seed(9000));

    for round in 0..400 {
        let command = script[round % script.len()];
        a.apply(command);
        b.apply(command);
        let elapsed = 90 + (round as u64 * 37) % 600;
        a.tick(elapsed);
        b.tick(elapsed);
        assert_eq!(a.snapshot(), b.snapshot(), "diverged at round {round}");
    }
}

/// Feeds a fixed command script one entry per poll, then reports no input.
struct ScriptedInput {
    script: VecDeque<Command>,
}

impl ScriptedInput {
    fn new(commands: &[Command]) -> Self {
        Self {
            script: commands.iter().copied().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<Option<Command>> {
        Ok(self.script.pop_front())
    }
}

/// Counts frames and remembers the last snapshot it was shown.
#[derive(Default)]
struct RecordingRenderer {
    frames: usize,
    last: Option<FrameSnapshot>,
}

impl Renderer for RecordingRenderer {
    fn present(&mut self, snapshot: &FrameSnapshot) -> Result<()> {
        self.frames += 1;
        self.last = Some(snapshot.clone());
        Ok(())
    }
}

#[test]
fn test_session_loop_runs_headless_over_the_trait_seams() {
    let mut state = GameState::with_spawner(Ruleset::terminal(), Spawner::with_seed(21));
    let mut input = ScriptedInput::new(&[
        Command::MoveLeft,
        Command::MoveLeft,
        Command::Rotate,
        Command::MoveRight,
        Command::SoftDrop,
    ]);
    let mut renderer = RecordingRenderer::default();
    let mut snap = FrameSnapshot::default();

    // The same loop shape both front ends use: poll, apply, tick, present.
    let mut frames = 0;
    while !state.game_over() {
        if let Some(command) = input.poll().unwrap() {
            state.apply(command);
        }
        state.tick(501);
        state.snapshot_into(&mut snap);
        renderer.present(&snap).unwrap();
        frames += 1;
        assert!(frames < 100_000, "session did not terminate");
    }
    state.snapshot_into(&mut snap);
    renderer.present(&snap).unwrap();

    assert_eq!(renderer.frames, frames + 1);
    let last = renderer.last.expect("renderer saw at least one frame");
    assert!(last.game_over);
    // Terminal ruleset plays without a preview.
    assert!(last.next.is_none());
    assert_eq!(last.board, state.snapshot().board);
}

#[test]
fn test_windowed_preview_tracks_the_queued_piece() {
    let mut state = GameState::with_spawner(Ruleset::windowed(), Spawner::with_seed(4242));
    for _ in 0..200 {
        if state.game_over() {
            break;
        }
        let snap = state.snapshot();
        let next = snap.next.expect("windowed games expose the preview");
        assert_eq!(next.shape, state.next().shape);
        assert_eq!(next.color, state.next().color);
        state.tick(501);
    }
}
