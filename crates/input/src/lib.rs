//! Input module (engine-facing).
//!
//! Turns raw device state into per-player [`crate::types::PlayerAction`]s.
//! The [`translator`] is device agnostic: it takes physical [`Key`]s and
//! polled [`GamepadSnapshot`]s plus a caller-supplied timestamp. [`map`]
//! adapts `crossterm` key events, including terminals without key-release
//! events (see [`InputTiming::key_release_timeout_ms`]).

pub mod clock;
pub mod gamepad;
pub mod keymap;
pub mod keys;
pub mod map;
pub mod translator;

pub use versus_tetris_types as types;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use gamepad::{GamepadSlots, GamepadSnapshot, PadControl};
pub use keymap::KeyMap;
pub use keys::Key;
pub use map::{handle_key_event, key_from_code, should_quit, should_restart, KeyPhase};
pub use translator::{
    Actions, InputTiming, InputTranslator, DEFAULT_KEY_RELEASE_TIMEOUT_MS, MAX_ACTIONS_PER_POLL,
};
