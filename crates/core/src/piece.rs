//! Piece module - tetromino bitmap matrices and clockwise rotation
//!
//! A shape is a small (at most 4x4) occupancy matrix. Rotation is a plain
//! matrix transform, so rotating a shape four times yields the original
//! matrix bit-for-bit.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest matrix side used by any shape.
pub const MAX_SHAPE_SIZE: usize = 4;

/// Occupancy matrix of a piece, row-major, `rows x cols` of a 4x4 buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    mask: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from one bit pattern per row; the most significant of the
    /// `cols` low bits is column 0.
    const fn from_bits(rows: u8, cols: u8, pattern: [u8; MAX_SHAPE_SIZE]) -> Self {
        let mut mask = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < rows as usize {
            let mut c = 0;
            while c < cols as usize {
                mask[r][c] = (pattern[r] >> (cols as usize - 1 - c)) & 1 == 1;
                c += 1;
            }
            r += 1;
        }
        Self { rows, cols, mask }
    }

    /// Build a shape from a matrix of cell values (0 = empty).
    ///
    /// Returns `None` for empty, ragged or oversized matrices.
    pub fn from_matrix(matrix: &[&[u8]]) -> Option<Self> {
        let rows = matrix.len();
        let cols = matrix.first()?.len();
        if rows == 0 || cols == 0 || rows > MAX_SHAPE_SIZE || cols > MAX_SHAPE_SIZE {
            return None;
        }
        if matrix.iter().any(|row| row.len() != cols) {
            return None;
        }

        let mut mask = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in matrix.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                mask[r][c] = value != 0;
            }
        }
        Some(Self {
            rows: rows as u8,
            cols: cols as u8,
            mask,
        })
    }

    /// Spawn orientation matrix for a piece kind.
    pub fn spawn(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => I_SHAPE,
            PieceKind::O => O_SHAPE,
            PieceKind::T => T_SHAPE,
            PieceKind::S => S_SHAPE,
            PieceKind::Z => Z_SHAPE,
            PieceKind::J => J_SHAPE,
            PieceKind::L => L_SHAPE,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Occupied cells as `(col, row)` offsets from the matrix origin.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.mask[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Rotate 90° clockwise: `rotated[i][j] = original[rows - 1 - j][i]`.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut mask = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, out_row) in mask.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.mask[rows - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            mask,
        }
    }
}

const I_SHAPE: Shape = Shape::from_bits(4, 4, [0b0000, 0b1111, 0b0000, 0b0000]);
const O_SHAPE: Shape = Shape::from_bits(2, 2, [0b11, 0b11, 0, 0]);
const T_SHAPE: Shape = Shape::from_bits(3, 3, [0b010, 0b111, 0b000, 0]);
const S_SHAPE: Shape = Shape::from_bits(3, 3, [0b011, 0b110, 0b000, 0]);
const Z_SHAPE: Shape = Shape::from_bits(3, 3, [0b110, 0b011, 0b000, 0]);
const J_SHAPE: Shape = Shape::from_bits(3, 3, [0b100, 0b111, 0b000, 0]);
const L_SHAPE: Shape = Shape::from_bits(3, 3, [0b001, 0b111, 0b000, 0]);

/// Offsets tried, in order, when an in-place rotation collides.
pub const WALL_KICKS: [(i8, i8); 5] = [(-1, 0), (1, 0), (0, -1), (-1, -1), (1, -1)];

/// A piece: its kind (color) and current orientation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl Piece {
    /// New piece in spawn orientation.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::spawn(kind),
        }
    }

    /// Horizontal spawn column: board centre minus half the matrix width.
    pub fn spawn_x(&self) -> i8 {
        (BOARD_WIDTH / 2) as i8 - (self.shape.cols() / 2) as i8
    }
}

/// The falling piece and its board position (top-left of the matrix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub piece: Piece,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place a piece at its spawn position (centred, row 0).
    pub fn spawn(piece: Piece) -> Self {
        Self {
            x: piece.spawn_x(),
            y: 0,
            piece,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.piece.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.piece.shape
    }
}
