//! Versus Tetris (workspace facade crate).
//!
//! This package re-exports the workspace crates as `versus_tetris::{core,engine,input,term,types}`
//! while the implementation lives in dedicated crates under `crates/`.

pub use versus_tetris_core as core;
pub use versus_tetris_engine as engine;
pub use versus_tetris_input as input;
pub use versus_tetris_term as term;
pub use versus_tetris_types as types;
