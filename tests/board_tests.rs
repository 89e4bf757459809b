//! Board tests

use versus_tetris::core::{Board, Shape};
use versus_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_board_bounds() {
    let mut board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::T)));

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_occupied(-1, 10));
}

#[test]
fn test_collision_walls_floor_and_cells() {
    let mut board = Board::new();
    let t = Shape::spawn(PieceKind::T);

    assert!(!board.collides(&t, 0, 0));
    assert!(board.collides(&t, -1, 0));
    assert!(board.collides(&t, 8, 0));
    // The T's lowest filled row is its second one.
    assert!(!board.collides(&t, 0, 18));
    assert!(board.collides(&t, 0, 19));

    board.set(1, 5, Some(PieceKind::O));
    assert!(board.collides(&t, 0, 4));
    assert!(!board.collides(&t, 3, 4));
}

#[test]
fn test_rows_above_board_only_check_columns() {
    let board = Board::new();
    let i = Shape::spawn(PieceKind::I);
    assert!(!board.collides(&i, 3, -3));
    assert!(board.collides(&i, 7, -3));
}

#[test]
fn test_lock_drops_cells_above_board() {
    let mut board = Board::new();
    let o = Shape::spawn(PieceKind::O);
    board.lock_shape(&o, 4, -1, PieceKind::O);

    assert!(board.is_occupied(4, 0));
    assert!(board.is_occupied(5, 0));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
}

#[test]
fn test_clear_non_adjacent_rows_shifts_down() {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::I);
    board.set(0, 18, Some(PieceKind::T));
    board.fill_row(17, PieceKind::I);
    board.set(9, 16, Some(PieceKind::Z));

    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(18));
    assert_eq!(board.clear_full_rows(), 2);

    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(9, 18), Some(Some(PieceKind::Z)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
}

#[test]
fn test_clear_with_nothing_full() {
    let mut board = Board::new();
    board.set(3, 19, Some(PieceKind::L));
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board.get(3, 19), Some(Some(PieceKind::L)));
}

#[test]
fn test_clear_row_in_middle_of_stack() {
    let mut board = Board::new();
    for r in 0..5 {
        board.set(r, r, Some(PieceKind::J));
    }
    board.fill_row(5, PieceKind::I);
    board.set(3, 10, Some(PieceKind::S));

    assert_eq!(board.clear_full_rows(), 1);

    for r in 0..5 {
        assert_eq!(board.get(r, r + 1), Some(Some(PieceKind::J)), "row {r}");
    }
    assert!((0..BOARD_WIDTH as i8).all(|x| !board.is_occupied(x, 0)));
    assert_eq!(board.get(3, 10), Some(Some(PieceKind::S)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 6);
}
