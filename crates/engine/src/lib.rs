//! Orchestration layer: the game state machine, runtime configuration and
//! persisted records.
//!
//! - [`game`]: phases, action routing, gravity ticks and match results
//! - [`config`]: environment-driven settings
//! - [`records`]: high score and match history on disk

pub mod config;
pub mod game;
pub mod records;

pub use versus_tetris_core as core;
pub use versus_tetris_input as input;
pub use versus_tetris_types as types;

pub use config::{GameConfig, DEFAULT_RECORDS_PATH};
pub use game::{Game, MatchResult, Phase};
pub use records::{MatchRecord, PlayerLine, RecordStore};
