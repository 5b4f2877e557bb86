//! Game board: a 10x20 grid of palette cells.
//!
//! The grid is stored as a flat array in row-major order, row 0 at the top.
//! Coordinates passed in are signed so callers can probe positions above the
//! top edge, where pieces legitimately sit right after spawning.

use crate::shape::Shape;
use crate::types::{Cell, ColorId, Offset, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board.
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// The settled playfield, without the active piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Flat index for (row, col), or `None` when out of bounds.
    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        if col < 0 || col >= BOARD_WIDTH as i32 || row < 0 || row >= BOARD_HEIGHT as i32 {
            return None;
        }
        Some(row as usize * BOARD_WIDTH + col as usize)
    }

    /// Cell at (row, col), or `None` when out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Write a cell. Returns whether (row, col) was in bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether an in-bounds cell holds a settled block.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Whether every cell in `row` holds a settled block.
    pub fn is_row_full(&self, row: usize) -> bool {
        let start = row * BOARD_WIDTH;
        self.cells[start..start + BOARD_WIDTH]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Collision test for `shape` at `at`.
    ///
    /// Every occupied shape cell is checked: columns against [0, width),
    /// rows against the floor, and overlap against settled blocks. Rows
    /// above the top edge are column-checked only, so a piece overhanging
    /// the top of the board does not collide there.
    pub fn collides(&self, shape: &Shape, at: Offset) -> bool {
        for (row, col) in shape.cells() {
            let row = at.row + row as i32;
            let col = at.col + col as i32;
            if col < 0 || col >= BOARD_WIDTH as i32 {
                return true;
            }
            if row >= BOARD_HEIGHT as i32 {
                return true;
            }
            if row >= 0 && self.is_occupied(row, col) {
                return true;
            }
        }
        false
    }

    /// Write `color` into every board cell covered by `shape` at `at`.
    ///
    /// Cells above the top edge fall outside the stored grid and are
    /// dropped without being written, the long-standing behavior when a
    /// piece locks while still overhanging the top.
    pub fn merge(&mut self, shape: &Shape, at: Offset, color: ColorId) {
        for (row, col) in shape.cells() {
            if let Some(idx) = Self::index(at.row + row as i32, at.col + col as i32) {
                self.cells[idx] = Some(color);
            }
        }
    }

    /// Remove every full row and compact the rest downward.
    ///
    /// Single bottom-up pass with two cursors: surviving rows keep their
    /// relative order, and the vacated rows at the top are emptied.
    /// Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0u32;
        let mut write_row = BOARD_HEIGHT;
        for read_row in (0..BOARD_HEIGHT).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * BOARD_WIDTH;
                    let dst = write_row * BOARD_WIDTH;
                    self.cells.copy_within(src..src + BOARD_WIDTH, dst);
                }
            }
        }
        self.cells[..write_row * BOARD_WIDTH].fill(None);
        cleared
    }

    /// Flatten into the snapshot grid: 0 for empty, 1..=7 for palette ids.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH]; BOARD_HEIGHT]) {
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                out[row][col] = self.cells[row * BOARD_WIDTH + col].map_or(0, |color| color.get());
            }
        }
    }

    /// Number of settled blocks on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Build a board from literal rows, 0 for empty and 1..=7 for colors.
    /// Row 0 of the input is the top of the board.
    #[cfg(test)]
    pub fn from_rows(rows: &[[u8; BOARD_WIDTH]]) -> Self {
        let mut board = Self::new();
        let top = BOARD_HEIGHT - rows.len();
        for (i, row) in rows.iter().enumerate() {
            for (col, &value) in row.iter().enumerate() {
                board.cells[(top + i) * BOARD_WIDTH + col] = ColorId::new(value);
            }
        }
        board
    }

    /// Dump the grid as literal rows, inverse of [`Board::from_rows`].
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<[u8; BOARD_WIDTH]> {
        let mut out = Vec::with_capacity(BOARD_HEIGHT);
        for row in 0..BOARD_HEIGHT {
            let mut flat = [0u8; BOARD_WIDTH];
            for col in 0..BOARD_WIDTH {
                flat[col] = self.cells[row * BOARD_WIDTH + col].map_or(0, |color| color.get());
            }
            out.push(flat);
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
