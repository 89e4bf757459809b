//! Engine module - one board with its falling and next piece
//!
//! The engine owns the grid, the current piece (with position) and the next
//! piece. Every operation is synchronous and reports failure through its
//! return value; a rejected move or rotation never changes any state.

use crate::board::Board;
use crate::piece::{ActivePiece, Piece, WALL_KICKS};
use crate::rng::PieceSource;
use crate::snapshot::{BoardSnapshot, Grid, EMPTY_GRID};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug)]
pub struct Engine {
    board: Board,
    current: ActivePiece,
    next: Piece,
    source: Box<dyn PieceSource>,
}

impl Engine {
    /// Create an engine with an empty board and a spawned first piece.
    pub fn new(source: impl PieceSource + 'static) -> Self {
        Self::with_source(Box::new(source))
    }

    pub fn with_source(mut source: Box<dyn PieceSource>) -> Self {
        let first = Piece::new(source.next_kind());
        let next = Piece::new(source.next_kind());
        Self {
            board: Board::new(),
            current: ActivePiece::spawn(first),
            next,
            source,
        }
    }

    /// Empty the board, draw a fresh next piece and spawn.
    pub fn reset(&mut self) {
        self.board.clear();
        self.next = Piece::new(self.source.next_kind());
        // Always fits on an empty board.
        self.spawn_new_piece();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scenario setup.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> &ActivePiece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    /// Promote the next piece to current at the spawn position and draw a new next.
    ///
    /// Returns false when the spawned piece collides (the caller's game over).
    /// The board is never touched; the next piece is drawn either way.
    pub fn spawn_new_piece(&mut self) -> bool {
        let drawn = Piece::new(self.source.next_kind());
        let promoted = std::mem::replace(&mut self.next, drawn);
        self.current = ActivePiece::spawn(promoted);

        !self
            .board
            .collides(self.current.shape(), self.current.x, self.current.y)
    }

    /// Try to move the current piece
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        let (Some(x), Some(y)) = (
            self.current.x.checked_add(dx),
            self.current.y.checked_add(dy),
        ) else {
            return false;
        };

        if self.board.collides(self.current.shape(), x, y) {
            return false;
        }
        self.current.x = x;
        self.current.y = y;
        true
    }

    /// Rotate the current piece clockwise, trying wall kicks if needed.
    pub fn rotate_piece(&mut self) -> bool {
        let rotated = self.current.shape().rotated_cw();
        let (x, y) = (self.current.x, self.current.y);

        let offsets = std::iter::once((0, 0)).chain(WALL_KICKS);
        for (dx, dy) in offsets {
            let (Some(kx), Some(ky)) = (x.checked_add(dx), y.checked_add(dy)) else {
                continue;
            };
            if !self.board.collides(&rotated, kx, ky) {
                self.current.piece.shape = rotated;
                self.current.x = kx;
                self.current.y = ky;
                return true;
            }
        }

        false
    }

    /// Write the current piece into the board (rows above the board are dropped).
    pub fn lock_piece(&mut self) {
        let active = self.current;
        self.board
            .lock_shape(active.shape(), active.x, active.y, active.kind());
    }

    /// Remove full rows; returns how many were cleared.
    pub fn clear_lines(&mut self) -> usize {
        self.board.clear_full_rows()
    }

    /// Calculate the ghost piece Y position (where the piece would land)
    pub fn ghost_y(&self) -> i8 {
        let shape = self.current.shape();
        let mut y = self.current.y;
        while let Some(below) = y.checked_add(1) {
            if self.board.collides(shape, self.current.x, below) {
                break;
            }
            y = below;
        }
        y
    }

    /// Whether the current piece could move one row down.
    pub fn can_fall(&self) -> bool {
        self.current
            .y
            .checked_add(1)
            .is_some_and(|y| !self.board.collides(self.current.shape(), self.current.x, y))
    }

    /// Fill `out` with board snapshot data; `with_ghost` controls the ghost grid.
    pub fn snapshot_into(&self, out: &mut BoardSnapshot, with_ghost: bool) {
        self.board.write_u8_grid(&mut out.cells);
        stamp(&mut out.cells, &self.current, self.current.y);

        out.ghost = if with_ghost {
            let mut ghost = EMPTY_GRID;
            stamp(&mut ghost, &self.current, self.ghost_y());
            Some(ghost)
        } else {
            None
        };

        out.next = self.next.kind;
        out.next_shape = self.next.shape;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s, true);
        s
    }
}

/// Draw a piece's visible cells into a grid at row `y`.
fn stamp(grid: &mut Grid, active: &ActivePiece, y: i8) {
    let color = active.kind().color_id();
    for (dx, dy) in active.shape().cells() {
        let bx = i16::from(active.x) + i16::from(dx);
        let by = i16::from(y) + i16::from(dy);
        if (0..BOARD_WIDTH as i16).contains(&bx) && (0..BOARD_HEIGHT as i16).contains(&by) {
            grid[by as usize][bx as usize] = color;
        }
    }
}
