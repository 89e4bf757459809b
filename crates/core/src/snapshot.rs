use crate::piece::Shape;
use crate::types::{PieceKind, PlayerId, BOARD_HEIGHT, BOARD_WIDTH};

/// Row-major color id grid (0 = empty, 1..=7 = piece color).
pub type Grid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

pub const EMPTY_GRID: Grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    /// Locked cells with the current piece overlaid.
    pub cells: Grid,
    /// The current piece projected to its landing row; `None` without an active piece.
    pub ghost: Option<Grid>,
    pub next: PieceKind,
    pub next_shape: Shape,
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            cells: EMPTY_GRID,
            ghost: None,
            next: PieceKind::I,
            next_shape: Shape::spawn(PieceKind::I),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionStats {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub lost: bool,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            lost: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub player: PlayerId,
    pub opponent: Option<PlayerId>,
    pub board: BoardSnapshot,
    pub stats: SessionStats,
}

impl SessionSnapshot {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            opponent: None,
            board: BoardSnapshot::default(),
            stats: SessionStats::default(),
        }
    }
}
