//! Random piece generation and spawn placement.
//!
//! Kind and color are independent draws: kind uniform over the seven-entry
//! shape catalog, color uniform over the palette ids 1..=7. A piece's color
//! therefore says nothing about its shape.
//!
//! The generator is a seedable ChaCha stream, so tests and replays can pin
//! the exact piece sequence while normal play seeds from OS entropy.

use rand::Rng;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

use crate::shape::{get_shape, Shape};
use crate::types::{ColorId, Offset, PieceKind, BOARD_WIDTH, PALETTE};

/// A drawn piece: shape matrix plus palette color.
///
/// The board position of the active piece lives in the game state, not
/// here; the lookahead piece has no position at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: ColorId,
}

/// Uniform random piece source.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: ChaCha8Rng,
}

impl Spawner {
    /// Entropy-seeded source for normal play.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Deterministic source: equal seeds draw equal piece sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next piece.
    pub fn draw(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())];
        let color = ColorId::MIN.saturating_add(self.rng.random_range(0..PALETTE.len() as u8));
        Piece {
            kind,
            shape: get_shape(kind),
            color,
        }
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

/// Board offset for a freshly promoted piece: flush with the top edge,
/// horizontally centered using the shape's top-row width.
pub fn spawn_offset(shape: &Shape) -> Offset {
    Offset::new(0, (BOARD_WIDTH / 2) as i32 - (shape.width() / 2) as i32)
}
