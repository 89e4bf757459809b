//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a plain framebuffer that is diffed and flushed to the terminal with
//! crossterm, instead of going through a widget toolkit.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`game_view`]: pure mapping from a [`Game`](crate::engine::Game) to a framebuffer
//! - [`renderer`]: terminal setup/teardown and frame flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use versus_tetris_core as core;
pub use versus_tetris_engine as engine;
pub use versus_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
