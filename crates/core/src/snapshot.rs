//! Frame snapshots: the engine-to-renderer data contract.
//!
//! Renderers never touch `GameState` directly. Each frame the front end
//! refreshes a caller-owned [`FrameSnapshot`] via `GameState::snapshot_into`
//! and paints from that, which keeps the render path free of allocation and
//! keeps engine internals out of the drawing code.

use crate::shape::{get_shape, Shape};
use crate::types::{ColorId, Offset, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The active piece as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    /// Current orientation of the shape matrix.
    pub shape: Shape,
    /// Palette id to paint the piece with.
    pub color: ColorId,
    /// Board position of the shape's top-left corner. The row may be
    /// negative while the piece still overhangs the top edge.
    pub at: Offset,
}

/// The lookahead piece: shape and color only, no board position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSnapshot {
    pub shape: Shape,
    pub color: ColorId,
}

/// Immutable per-frame picture of one game.
///
/// `board` holds only settled blocks; the active piece is overlaid from
/// `active` by the renderer. `next` is `None` when the ruleset keeps the
/// lookahead hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    /// Settled grid, row 0 at the top: 0 empty, 1..=7 palette ids.
    pub board: [[u8; BOARD_WIDTH]; BOARD_HEIGHT],
    pub active: ActiveSnapshot,
    pub next: Option<NextSnapshot>,
    pub score: u64,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_WIDTH]; BOARD_HEIGHT],
            active: ActiveSnapshot {
                shape: get_shape(PieceKind::O),
                color: ColorId::MIN,
                at: Offset::new(0, 0),
            },
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_blank() {
        let snap = FrameSnapshot::default();
        assert!(snap.board.iter().flatten().all(|&cell| cell == 0));
        assert!(snap.next.is_none());
        assert_eq!(snap.score, 0);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.lines, 0);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_snapshots_compare_by_value() {
        let a = FrameSnapshot::default();
        let mut b = FrameSnapshot::default();
        assert_eq!(a, b);
        b.board[19][0] = 3;
        assert_ne!(a, b);
    }
}
