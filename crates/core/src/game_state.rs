//! Game state: the complete simulation for one game.
//!
//! `GameState` owns the board, the active and lookahead pieces, the score
//! counters, and the gravity timer. Front ends drive it with exactly two
//! calls per frame: [`GameState::apply`] for each player command and
//! [`GameState::tick`] with the elapsed wall-clock time. Everything else,
//! including locking, line clears, and game over, happens inside.
//!
//! # Gravity
//!
//! Time accumulates in a millisecond counter. When the accumulated time
//! exceeds the current drop interval (strictly, so an exact boundary does
//! not fire), the counter resets to zero and the piece advances one row,
//! or locks if the row below is blocked. One `tick` call advances gravity
//! at most one step regardless of how much time it reports, so a stalled
//! frame cannot teleport the piece.
//!
//! # Lock flow
//!
//! Locking merges the active piece into the board, clears full rows,
//! applies the ruleset's scoring and level policies, then promotes the
//! lookahead piece to the spawn position. If the promoted piece already
//! overlaps settled blocks at spawn the game is over; the overlapping
//! piece stays unmerged.

use crate::board::Board;
use crate::rules::{level_for, Ruleset};
use crate::snapshot::{ActiveSnapshot, FrameSnapshot, NextSnapshot};
use crate::spawn::{spawn_offset, Piece, Spawner};
use crate::types::{Command, Offset};

/// Complete simulation state for one game.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    at: Offset,
    next: Piece,
    spawner: Spawner,
    rules: Ruleset,
    score: u64,
    lines: u32,
    level: u32,
    drop_interval_ms: u64,
    drop_timer_ms: u64,
    game_over: bool,
}

impl GameState {
    /// New game under `rules` with an entropy-seeded piece source.
    pub fn new(rules: Ruleset) -> Self {
        Self::with_spawner(rules, Spawner::new())
    }

    /// New game over an injected piece source. Tests and benches pass a
    /// seeded spawner here to pin the piece sequence.
    pub fn with_spawner(rules: Ruleset, mut spawner: Spawner) -> Self {
        let active = spawner.draw();
        let next = spawner.draw();
        let at = spawn_offset(&active.shape);
        let level = 1;
        Self {
            board: Board::new(),
            active,
            at,
            next,
            spawner,
            rules,
            score: 0,
            lines: 0,
            level,
            drop_interval_ms: rules.gravity.interval_ms(level),
            drop_timer_ms: 0,
            game_over: false,
        }
    }

    // Accessors

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current milliseconds between gravity steps.
    pub fn drop_interval_ms(&self) -> u64 {
        self.drop_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece.
    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// The piece queued to fall after the active one locks.
    pub fn next(&self) -> &Piece {
        &self.next
    }

    /// Board position of the falling piece's top-left corner.
    pub fn offset(&self) -> Offset {
        self.at
    }

    /// Apply one player command. Returns whether the game state changed.
    ///
    /// All movement is refused once the game is over. `Quit` never touches
    /// the simulation; front ends act on it themselves.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.game_over {
            return false;
        }
        match command {
            Command::MoveLeft => self.try_shift(0, -1),
            Command::MoveRight => self.try_shift(0, 1),
            Command::SoftDrop => self.try_shift(1, 0),
            Command::Rotate => self.try_rotate(),
            Command::Quit => false,
        }
    }

    /// Advance simulation time by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if self.game_over {
            return;
        }
        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms > self.drop_interval_ms {
            self.drop_timer_ms = 0;
            self.gravity_step();
        }
    }

    /// Merge the active piece, clear lines, apply scoring, and promote the
    /// lookahead piece. Sets `game_over` when the promoted piece cannot
    /// spawn; a blocked piece is never merged.
    pub fn lock_piece(&mut self) {
        self.board.merge(&self.active.shape, self.at, self.active.color);
        let cleared = self.board.clear_lines();
        if cleared > 0 {
            self.lines += cleared;
            self.score += self.rules.scoring.points(cleared);
            self.level = level_for(self.lines);
            self.drop_interval_ms = self.rules.gravity.interval_ms(self.level);
        }
        self.active = std::mem::replace(&mut self.next, self.spawner.draw());
        self.at = spawn_offset(&self.active.shape);
        if self.board.collides(&self.active.shape, self.at) {
            self.game_over = true;
        }
    }

    /// Refresh `out` with the current frame, reusing its storage.
    pub fn snapshot_into(&self, out: &mut FrameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot {
            shape: self.active.shape.clone(),
            color: self.active.color,
            at: self.at,
        };
        out.next = if self.rules.show_next {
            Some(NextSnapshot {
                shape: self.next.shape.clone(),
                color: self.next.color,
            })
        } else {
            None
        };
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    /// Allocate a fresh snapshot of the current frame.
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut out = FrameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    fn try_shift(&mut self, d_row: i32, d_col: i32) -> bool {
        let shifted = Offset::new(self.at.row + d_row, self.at.col + d_col);
        if self.board.collides(&self.active.shape, shifted) {
            return false;
        }
        self.at = shifted;
        true
    }

    fn try_rotate(&mut self) -> bool {
        let rotated = self.active.shape.rotated_cw();
        if self.board.collides(&rotated, self.at) {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    // One gravity step: down a row when free, lock when resting.
    fn gravity_step(&mut self) {
        let below = Offset::new(self.at.row + 1, self.at.col);
        if self.board.collides(&self.active.shape, below) {
            self.lock_piece();
        } else {
            self.at = below;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Ruleset::windowed())
    }
}
