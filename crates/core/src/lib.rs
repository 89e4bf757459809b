//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board rules and the per-player session state.
//! It has **no dependencies** on terminals, devices or files, so the same
//! code drives the terminal binary, the tests and the benches.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision detection and line clearing
//! - [`piece`]: tetromino matrices, clockwise rotation and wall-kick offsets
//! - [`engine`]: one board with its current and next piece
//! - [`rng`]: pluggable piece sources (uniform per spawn, no bag)
//! - [`scoring`]: fixed line table, level and gravity progression
//! - [`session`]: score, level, lines, gravity timer and loss flag
//! - [`snapshot`]: plain read models for rendering
//!
//! # Example
//!
//! ```
//! use versus_tetris_core::{PlayerSession, SimpleRng};
//! use versus_tetris_types::{GameAction, PlayerId};
//!
//! let mut session = PlayerSession::new(PlayerId::One, SimpleRng::new(12345));
//!
//! session.apply(GameAction::MoveRight);
//! session.apply(GameAction::Rotate);
//! session.apply(GameAction::HardDrop);
//!
//! assert!(session.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Gravity is driven by [`PlayerSession::update`] with the elapsed
//! milliseconds of each frame; the session never reads a clock itself.

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use versus_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::Engine;
pub use piece::{ActivePiece, Piece, Shape, WALL_KICKS};
pub use rng::{OsRandom, PieceSequence, PieceSource, SimpleRng};
pub use scoring::{calculate_drop_score, calculate_line_score, drop_interval_ms, level_for_lines};
pub use session::{LockEvent, PlayerSession};
pub use snapshot::{BoardSnapshot, Grid, SessionSnapshot, SessionStats, EMPTY_GRID};
