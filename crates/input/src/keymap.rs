//! Key binding tables.
//!
//! Dual mode splits the keyboard into two disjoint sets:
//!
//! | Action | Player 1 | Player 2 |
//! |--------|----------|----------|
//! | Move left | `A` | `←`, numpad 4 |
//! | Move right | `D` | `→`, numpad 6 |
//! | Soft drop | `S` | `↓`, numpad 5 |
//! | Rotate | `W` | `↑`, numpad 8 |
//! | Hard drop | `J` | `Space` |
//!
//! `Enter` toggles pause. Single mode binds both sets to player 1.

use crate::keys::Key;
use crate::types::{GameAction, GameMode, PlayerAction, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: [Option<PlayerAction>; Key::COUNT],
}

impl KeyMap {
    /// A map with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: [None; Key::COUNT],
        }
    }

    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Single => Self::single(),
            GameMode::Dual => Self::dual(),
        }
    }

    pub fn dual() -> Self {
        let mut map = Self::empty();
        map.bind_set(PlayerId::One, PlayerId::Two);
        map
    }

    pub fn single() -> Self {
        let mut map = Self::empty();
        map.bind_set(PlayerId::One, PlayerId::One);
        map
    }

    fn bind_set(&mut self, left: PlayerId, right: PlayerId) {
        use GameAction::*;

        let left_keys = [
            (Key::KeyA, MoveLeft),
            (Key::KeyD, MoveRight),
            (Key::KeyS, SoftDrop),
            (Key::KeyW, Rotate),
            (Key::KeyJ, HardDrop),
        ];
        let right_keys = [
            (Key::ArrowLeft, MoveLeft),
            (Key::Numpad4, MoveLeft),
            (Key::ArrowRight, MoveRight),
            (Key::Numpad6, MoveRight),
            (Key::ArrowDown, SoftDrop),
            (Key::Numpad5, SoftDrop),
            (Key::ArrowUp, Rotate),
            (Key::Numpad8, Rotate),
            (Key::Space, HardDrop),
        ];

        for (key, action) in left_keys {
            self.bind(key, Some(PlayerAction::new(left, action)));
        }
        for (key, action) in right_keys {
            self.bind(key, Some(PlayerAction::new(right, action)));
        }
        self.bind(Key::Enter, Some(PlayerAction::new(PlayerId::One, Pause)));
    }

    /// Replace the binding of one key (`None` unbinds it).
    pub fn bind(&mut self, key: Key, binding: Option<PlayerAction>) {
        self.bindings[key.index()] = binding;
    }

    pub fn lookup(&self, key: Key) -> Option<PlayerAction> {
        self.bindings[key.index()]
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::single()
    }
}
