//! Shared types module - constants and fundamental data types
//!
//! This module defines the types shared by the engine and both front ends.
//! Everything here is pure data with no external dependencies, so it can be
//! used from any context (engine, terminal view, windowed view, tests).
//!
//! # Board Dimensions
//!
//! Classic playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Gravity Timing
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 500 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 50 | Interval reduction per level gained |
//! | `MIN_DROP_MS` | 100 | Fastest interval the scaling policy reaches |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed to gain a level |
//!
//! The scaling policy yields `max(100, 500 - (level - 1) * 50)`, so level 9
//! and above play at the 100ms floor.
//!
//! # Palette
//!
//! Board cells store a [`ColorId`] (1-based palette index) rather than a
//! piece kind: color is drawn independently of shape at spawn time, so a
//! locked cell only knows which of the seven palette entries to paint.
//!
//! # Examples
//!
//! ```
//! use quadfall_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PALETTE};
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PALETTE.len(), 7);
//!
//! let command = Command::MoveLeft;
//! assert_ne!(command, Command::MoveRight);
//! ```

use std::num::NonZeroU8;

/// Board width in cells (10 columns).
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows).
pub const BOARD_HEIGHT: usize = 20;

/// Gravity interval at level 1, in milliseconds.
pub const BASE_DROP_MS: u64 = 500;

/// Gravity interval reduction per level gained, in milliseconds.
pub const DROP_STEP_MS: u64 = 50;

/// Floor for the scaled gravity interval, in milliseconds.
pub const MIN_DROP_MS: u64 = 100;

/// Cleared lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// 1-based palette index stored in occupied board cells.
///
/// The niche in `NonZeroU8` keeps `Cell` a single byte.
pub type ColorId = NonZeroU8;

/// One board cell: `None` when empty, otherwise the palette index to paint.
pub type Cell = Option<ColorId>;

/// RGB palette indexed by `ColorId - 1`.
///
/// | Index | Color |
/// |-------|---------|
/// | 1 | cyan |
/// | 2 | blue |
/// | 3 | yellow |
/// | 4 | green |
/// | 5 | magenta |
/// | 6 | red |
/// | 7 | white |
pub const PALETTE: [(u8, u8, u8); 7] = [
    (0, 255, 255),
    (0, 0, 255),
    (255, 255, 0),
    (0, 255, 0),
    (255, 0, 255),
    (255, 0, 0),
    (255, 255, 255),
];

/// The seven tetromino kinds.
///
/// Kinds name shape matrices only; the color painted on screen comes from
/// the independently drawn [`ColorId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order. Spawning draws uniformly from this array.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];
}

/// Board-relative position of a shape's top-left bounding-box corner.
///
/// Coordinates are signed: a freshly spawned or rotated piece may extend
/// above the top edge, where `row` is negative for some of its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Row index, 0 at the top, growing downward.
    pub row: i32,
    /// Column index, 0 at the left edge.
    pub col: i32,
}

impl Offset {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Player commands shared by every front end.
///
/// Front ends map their own raw input (terminal key events, window
/// keyboard state) onto these before handing them to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the active piece one column left.
    MoveLeft,
    /// Shift the active piece one column right.
    MoveRight,
    /// Drop the active piece one row. Soft drops never lock the piece.
    SoftDrop,
    /// Rotate the active piece 90 degrees clockwise in place.
    Rotate,
    /// Leave the game immediately.
    Quit,
}
