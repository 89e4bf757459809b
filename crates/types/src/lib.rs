//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable from the
//! simulation, the input layer, the orchestrator and the terminal front end.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity at level 1 |
//! | `DROP_STEP_MS` | 50 | Gravity speed-up per level |
//! | `DROP_INTERVAL_MIN_MS` | 50 | Gravity floor |
//! | `DEFAULT_REPEAT_DELAY_MS` | 150 | Hold time before the first auto-repeat |
//! | `DEFAULT_REPEAT_RATE_MS` | 100 | Interval between later auto-repeats |
//! | `DEFAULT_ROTATE_DEBOUNCE_MS` | 150 | Minimum gap between accepted rotations |
//!
//! # Examples
//!
//! ```
//! use versus_tetris_types::{GameAction, PieceKind, PlayerId, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_color_id(3), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.color_id(), 3);
//! assert!(GameAction::MoveLeft.is_repeatable());
//! assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level gained
pub const DROP_STEP_MS: u32 = 50;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 50;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Hold time before a held movement input starts repeating.
pub const DEFAULT_REPEAT_DELAY_MS: u64 = 150;

/// Interval between auto-repeats once repeating.
pub const DEFAULT_REPEAT_RATE_MS: u64 = 100;

/// Minimum gap between two accepted rotations of the same player.
pub const DEFAULT_ROTATE_DEBOUNCE_MS: u64 = 150;

/// Analog stick deflection that must be exceeded to count as pressed.
pub const DEFAULT_STICK_DEADZONE: f32 = 0.3;

/// Line clear scoring table, indexed by rows cleared in one lock.
///
/// Points are multiplied by the current level (1-based).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points per row for a soft drop step
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row travelled by a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Maximum number of match records kept by the record store
pub const MAX_MATCH_RECORDS: usize = 10;


/// The seven tetromino piece kinds
///
/// The declaration order fixes the color id (1-based) used by board snapshots:
/// I=1, O=2, T=3, S=4, Z=5, J=6, L=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in color id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Kind for an index in `0..7`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Color id written into board snapshots (1..=7, 0 is empty).
    pub fn color_id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Self::from_index(id as usize - 1),
            _ => None,
        }
    }
}

/// Game actions that can be injected into the game
///
/// These are produced by the input translator from keyboard and gamepad
/// sources, and consumed by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (1 point per row)
    SoftDrop,
    /// Instantly drop piece to its landing row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle between playing and paused
    Pause,
}

impl GameAction {
    /// Whether holding the input auto-repeats the action.
    pub fn is_repeatable(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop
        )
    }
}

/// Logical player slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Zero-based index, usable for per-player tables.
    pub fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The other player of a versus match.
    pub fn opponent(&self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1-based number for display.
    pub fn number(&self) -> u8 {
        self.index() as u8 + 1
    }
}

/// An action addressed to one logical player.
///
/// `Pause` is not player specific; its `player` is the source that sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerAction {
    pub player: PlayerId,
    pub action: GameAction,
}

impl PlayerAction {
    pub fn new(player: PlayerId, action: GameAction) -> Self {
        Self { player, action }
    }
}

/// Number of simultaneous players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Single,
    Dual,
}

impl GameMode {
    pub fn player_count(&self) -> usize {
        match self {
            GameMode::Single => 1,
            GameMode::Dual => 2,
        }
    }

    /// Players taking part in this mode, in tick order.
    pub fn players(&self) -> &'static [PlayerId] {
        match self {
            GameMode::Single => &PlayerId::ALL[..1],
            GameMode::Dual => &PlayerId::ALL,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;
