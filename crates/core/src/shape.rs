//! Tetromino shape matrices and rotation.
//!
//! A shape is a small boolean occupancy matrix, at most 4x4. The seven
//! catalog entries use their minimal bounding boxes (1x4 for I, 2x2 for O,
//! 2x3 for the rest), and rotation produces a transposed box rather than
//! spinning inside a fixed frame. Rotating four times restores the original
//! matrix exactly.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// One row of occupancy flags inside a shape's bounding box.
pub type ShapeRow = ArrayVec<bool, 4>;

/// Occupancy matrix for one piece, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, 4>,
}

impl Shape {
    /// Build a shape from literal rows, nonzero meaning occupied.
    ///
    /// Rows and columns past 4 do not fit a tetromino bounding box and
    /// panic, so this stays behind the catalog and tests.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let mut out = ArrayVec::new();
        for row in rows {
            let mut flags = ShapeRow::new();
            for &value in *row {
                flags.push(value != 0);
            }
            out.push(flags);
        }
        Self { rows: out }
    }

    /// Number of rows in the bounding box.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the bounding box, read from the top row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Whether the bounding-box cell (row, col) is occupied.
    ///
    /// Out-of-box coordinates read as empty.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|flags| flags.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Iterate the occupied cells as (row, col) pairs inside the bounding box.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, flags)| {
            flags
                .iter()
                .enumerate()
                .filter(|(_, occupied)| **occupied)
                .map(move |(col, _)| (row, col))
        })
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Rotate 90 degrees clockwise into a new matrix.
    ///
    /// The new cell (row, col) reads the old cell (height - 1 - col, row):
    /// each output row is an input column walked from the bottom row up.
    /// An h x w box becomes a w x h box.
    pub fn rotated_cw(&self) -> Shape {
        let height = self.height();
        let width = self.width();
        let mut rows = ArrayVec::new();
        for row in 0..width {
            let mut flags = ShapeRow::new();
            for col in 0..height {
                flags.push(self.is_occupied(height - 1 - col, row));
            }
            rows.push(flags);
        }
        Shape { rows }
    }
}

/// Catalog lookup: the spawn-orientation matrix for a piece kind.
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_rows(shape: &Shape) -> Vec<Vec<u8>> {
        (0..shape.height())
            .map(|row| {
                (0..shape.width())
                    .map(|col| shape.is_occupied(row, col) as u8)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_catalog_dimensions() {
        assert_eq!(get_shape(PieceKind::I).height(), 1);
        assert_eq!(get_shape(PieceKind::I).width(), 4);
        assert_eq!(get_shape(PieceKind::O).height(), 2);
        assert_eq!(get_shape(PieceKind::O).width(), 2);
        for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
            let shape = get_shape(kind);
            assert_eq!(shape.height(), 2);
            assert_eq!(shape.width(), 3);
        }
    }

    #[test]
    fn test_every_piece_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).cell_count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn test_rotate_j_clockwise() {
        let rotated = get_shape(PieceKind::J).rotated_cw();
        assert_eq!(to_rows(&rotated), vec![vec![1, 1], vec![1, 0], vec![1, 0]]);
    }

    #[test]
    fn test_rotate_i_swaps_dimensions() {
        let upright = get_shape(PieceKind::I).rotated_cw();
        assert_eq!(upright.height(), 4);
        assert_eq!(upright.width(), 1);
        assert_eq!(
            to_rows(&upright),
            vec![vec![1], vec![1], vec![1], vec![1]]
        );
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let rotated = get_shape(PieceKind::T).rotated_cw();
        assert_eq!(to_rows(&rotated), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn test_four_rotations_restore_original() {
        for kind in PieceKind::ALL {
            let original = get_shape(kind);
            let mut shape = original.clone();
            for _ in 0..4 {
                shape = shape.rotated_cw();
            }
            assert_eq!(shape, original, "{kind:?}");
        }
    }

    #[test]
    fn test_rotation_preserves_cell_count() {
        for kind in PieceKind::ALL {
            let shape = get_shape(kind);
            assert_eq!(shape.rotated_cw().cell_count(), shape.cell_count());
        }
    }

    #[test]
    fn test_is_occupied_out_of_box_reads_empty() {
        let shape = get_shape(PieceKind::O);
        assert!(!shape.is_occupied(2, 0));
        assert!(!shape.is_occupied(0, 2));
    }

    #[test]
    fn test_cells_match_matrix() {
        let cells: Vec<_> = get_shape(PieceKind::S).cells().collect();
        assert_eq!(cells, vec![(0, 1), (0, 2), (1, 0), (1, 1)]);
    }
}
