//! Board behavior through the public facade.

use quadfall::core::{get_shape, Board};
use quadfall::types::{ColorId, Offset, PieceKind, BOARD_WIDTH};

fn color(id: u8) -> ColorId {
    ColorId::new(id).unwrap()
}

fn fill_row(board: &mut Board, row: i32) {
    for col in 0..BOARD_WIDTH as i32 {
        board.set(row, col, Some(color(1)));
    }
}

#[test]
fn test_new_board_has_no_blocks() {
    let board = Board::new();
    assert_eq!(board.occupied_count(), 0);
    for row in 0..20 {
        for col in 0..10 {
            assert!(!board.is_occupied(row, col));
        }
    }
}

#[test]
fn test_walls_and_floor_collide_even_when_empty() {
    let board = Board::new();
    let bar = get_shape(PieceKind::I);
    let square = get_shape(PieceKind::O);

    assert!(board.collides(&bar, Offset::new(0, -1)));
    assert!(board.collides(&bar, Offset::new(0, 7)));
    assert!(board.collides(&square, Offset::new(19, 4)));
    assert!(!board.collides(&bar, Offset::new(0, 0)));
    assert!(!board.collides(&square, Offset::new(18, 8)));
}

#[test]
fn test_rows_above_the_top_skip_occupancy_checks() {
    let mut board = Board::new();
    board.set(0, 4, Some(color(2)));
    let square = get_shape(PieceKind::O);

    // Entirely above the board: columns are validated, content is not.
    assert!(!board.collides(&square, Offset::new(-2, 4)));
    assert!(board.collides(&square, Offset::new(-2, -1)));
    assert!(board.collides(&square, Offset::new(-2, 9)));

    // Once a cell reaches row 0 the occupied block counts again.
    assert!(board.collides(&square, Offset::new(-1, 4)));
}

#[test]
fn test_merge_writes_the_piece_color() {
    let mut board = Board::new();
    let shape = get_shape(PieceKind::T);
    board.merge(&shape, Offset::new(18, 3), color(6));

    assert_eq!(board.get(18, 4), Some(Some(color(6))));
    assert_eq!(board.get(19, 3), Some(Some(color(6))));
    assert_eq!(board.get(19, 4), Some(Some(color(6))));
    assert_eq!(board.get(19, 5), Some(Some(color(6))));
    assert_eq!(board.occupied_count(), 4);
    assert!(board.collides(&shape, Offset::new(18, 3)));
}

#[test]
fn test_merge_discards_cells_above_the_top() {
    let mut board = Board::new();
    let square = get_shape(PieceKind::O);
    board.merge(&square, Offset::new(-1, 4), color(3));

    assert_eq!(board.occupied_count(), 2);
    assert!(board.is_occupied(0, 4));
    assert!(board.is_occupied(0, 5));
}

#[test]
fn test_clearing_separated_rows_compacts_downward() {
    let mut board = Board::new();
    fill_row(&mut board, 3);
    fill_row(&mut board, 7);
    board.set(2, 0, Some(color(3)));
    board.set(5, 1, Some(color(4)));
    board.set(12, 2, Some(color(5)));

    assert_eq!(board.clear_lines(), 2);
    assert_eq!(board.occupied_count(), 3);
    // Below both cleared rows: unmoved.
    assert!(board.is_occupied(12, 2));
    // Between them: down one row.
    assert!(board.is_occupied(6, 1));
    // Above both: down two rows.
    assert!(board.is_occupied(4, 0));
}

#[test]
fn test_clearing_four_rows_at_once() {
    let mut board = Board::new();
    for row in 16..20 {
        fill_row(&mut board, row);
    }
    board.set(15, 9, Some(color(7)));

    assert_eq!(board.clear_lines(), 4);
    assert_eq!(board.occupied_count(), 1);
    assert!(board.is_occupied(19, 9));
}

#[test]
fn test_partial_rows_never_clear() {
    let mut board = Board::new();
    for col in 0..9 {
        board.set(19, col, Some(color(1)));
    }
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board.occupied_count(), 9);
}
