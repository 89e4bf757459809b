//! Physical keys the game listens to.
//!
//! Names follow the standard keyboard `code` identifiers (layout independent),
//! so `KeyA` is the key left of `KeyS` whatever letter it prints.

/// A physical key with a binding in at least one key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    KeyA,
    KeyD,
    KeyS,
    KeyW,
    KeyJ,
    ArrowLeft,
    ArrowRight,
    ArrowDown,
    ArrowUp,
    Numpad4,
    Numpad6,
    Numpad5,
    Numpad8,
    Space,
    Enter,
}

impl Key {
    pub const COUNT: usize = 15;

    pub const ALL: [Key; Self::COUNT] = [
        Key::KeyA,
        Key::KeyD,
        Key::KeyS,
        Key::KeyW,
        Key::KeyJ,
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::ArrowDown,
        Key::ArrowUp,
        Key::Numpad4,
        Key::Numpad6,
        Key::Numpad5,
        Key::Numpad8,
        Key::Space,
        Key::Enter,
    ];

    /// Position in [`Key::ALL`], used to index per-key tables.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a keyboard `code` identifier such as `"KeyA"` or `"Numpad8"`.
    ///
    /// ```
    /// use versus_tetris_input::Key;
    ///
    /// assert_eq!(Key::from_code("ArrowUp"), Some(Key::ArrowUp));
    /// assert_eq!(Key::from_code("KeyQ"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Key::KeyA => "KeyA",
            Key::KeyD => "KeyD",
            Key::KeyS => "KeyS",
            Key::KeyW => "KeyW",
            Key::KeyJ => "KeyJ",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::ArrowDown => "ArrowDown",
            Key::ArrowUp => "ArrowUp",
            Key::Numpad4 => "Numpad4",
            Key::Numpad6 => "Numpad6",
            Key::Numpad5 => "Numpad5",
            Key::Numpad8 => "Numpad8",
            Key::Space => "Space",
            Key::Enter => "Enter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_table_position() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn test_code_round_trip() {
        for key in Key::ALL {
            assert_eq!(Key::from_code(key.code()), Some(key));
        }
        assert_eq!(Key::from_code("keya"), None);
    }
}
