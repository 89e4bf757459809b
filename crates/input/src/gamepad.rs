//! Gamepad snapshots, controls and player slots.
//!
//! Pads are read by polling: the caller hands [`GamepadSnapshot`]s to the
//! translator once per frame. Button indices follow the standard gamepad
//! layout (0 = A, 1 = B, 2 = X, 3 = Y, 12..=15 = d-pad up/down/left/right);
//! axes 0 and 1 are the left stick, `-1.0` is left/up.

use crate::types::{GameAction, GameMode, PlayerId};

/// Polled state of one connected pad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamepadSnapshot<'a> {
    /// Device index, stable while the pad stays connected.
    pub index: usize,
    pub buttons: &'a [bool],
    pub axes: &'a [f32],
}

impl<'a> GamepadSnapshot<'a> {
    pub fn new(index: usize, buttons: &'a [bool], axes: &'a [f32]) -> Self {
        Self {
            index,
            buttons,
            axes,
        }
    }

    /// Pressed state of a button; missing buttons read as released.
    pub fn button(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }

    /// Axis value in `[-1, 1]`; missing or non-finite axes read as centred.
    pub fn axis(&self, index: usize) -> f32 {
        match self.axes.get(index) {
            Some(&v) if v.is_finite() => v.clamp(-1.0, 1.0),
            _ => 0.0,
        }
    }
}

/// Every pad input the game reacts to. The stick directions act as virtual buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadControl {
    A,
    B,
    X,
    Y,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    StickLeft,
    StickRight,
    StickDown,
    StickUp,
}

impl PadControl {
    pub const COUNT: usize = 12;

    pub const ALL: [PadControl; Self::COUNT] = [
        PadControl::A,
        PadControl::B,
        PadControl::X,
        PadControl::Y,
        PadControl::DpadUp,
        PadControl::DpadDown,
        PadControl::DpadLeft,
        PadControl::DpadRight,
        PadControl::StickLeft,
        PadControl::StickRight,
        PadControl::StickDown,
        PadControl::StickUp,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Standard-layout button index, `None` for stick directions.
    pub fn button_index(&self) -> Option<usize> {
        match self {
            PadControl::A => Some(0),
            PadControl::B => Some(1),
            PadControl::X => Some(2),
            PadControl::Y => Some(3),
            PadControl::DpadUp => Some(12),
            PadControl::DpadDown => Some(13),
            PadControl::DpadLeft => Some(14),
            PadControl::DpadRight => Some(15),
            _ => None,
        }
    }

    /// Action fired by this control. `Y` is reserved and fires nothing.
    pub fn action(&self) -> Option<GameAction> {
        match self {
            PadControl::A => Some(GameAction::HardDrop),
            PadControl::B | PadControl::DpadUp | PadControl::StickUp => Some(GameAction::Rotate),
            PadControl::X => Some(GameAction::Pause),
            PadControl::Y => None,
            PadControl::DpadDown | PadControl::StickDown => Some(GameAction::SoftDrop),
            PadControl::DpadLeft | PadControl::StickLeft => Some(GameAction::MoveLeft),
            PadControl::DpadRight | PadControl::StickRight => Some(GameAction::MoveRight),
        }
    }

    /// Whether the control reads as pressed, given the stick deadzone.
    pub fn is_pressed(&self, pad: &GamepadSnapshot<'_>, deadzone: f32) -> bool {
        if let Some(button) = self.button_index() {
            return pad.button(button);
        }
        let (x, y) = (pad.axis(0), pad.axis(1));
        match self {
            PadControl::StickLeft => x < -deadzone,
            PadControl::StickRight => x > deadzone,
            PadControl::StickDown => y > deadzone,
            PadControl::StickUp => y < -deadzone,
            _ => false,
        }
    }
}

/// Which pad drives which player. One pad per player, filled in player order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamepadSlots {
    slots: [Option<usize>; 2],
    capacity: usize,
}

impl GamepadSlots {
    pub fn new(mode: GameMode) -> Self {
        Self {
            slots: [None; 2],
            capacity: mode.player_count(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Assign a pad to the first free slot. Returns its player, or `None`
    /// when every slot is taken. Reconnecting an assigned pad keeps its slot.
    pub fn connect(&mut self, index: usize) -> Option<PlayerId> {
        if let Some(player) = self.player_for(index) {
            return Some(player);
        }
        let free = self.slots[..self.capacity].iter().position(Option::is_none)?;
        self.slots[free] = Some(index);
        PlayerId::from_index(free)
    }

    /// Free the slot held by a pad. Returns the player it drove.
    pub fn disconnect(&mut self, index: usize) -> Option<PlayerId> {
        let player = self.player_for(index)?;
        self.slots[player.index()] = None;
        Some(player)
    }

    pub fn player_for(&self, index: usize) -> Option<PlayerId> {
        self.slots[..self.capacity]
            .iter()
            .position(|slot| *slot == Some(index))
            .and_then(PlayerId::from_index)
    }

    pub fn pad_for(&self, player: PlayerId) -> Option<usize> {
        self.slots.get(player.index()).copied().flatten()
    }

    pub fn connected(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_mapping() {
        assert_eq!(PadControl::A.action(), Some(GameAction::HardDrop));
        assert_eq!(PadControl::B.action(), Some(GameAction::Rotate));
        assert_eq!(PadControl::X.action(), Some(GameAction::Pause));
        assert_eq!(PadControl::Y.action(), None);
        assert_eq!(PadControl::DpadRight.button_index(), Some(15));
        assert_eq!(PadControl::StickUp.button_index(), None);
    }

    #[test]
    fn test_deadzone_is_strict() {
        let buttons = [false; 16];
        let axes = [-0.3, 0.31];
        let pad = GamepadSnapshot::new(0, &buttons, &axes);

        assert!(!PadControl::StickLeft.is_pressed(&pad, 0.3));
        assert!(PadControl::StickDown.is_pressed(&pad, 0.3));
    }

    #[test]
    fn test_malformed_snapshot_reads_as_idle() {
        let buttons = [true];
        let axes = [f32::NAN, f32::NEG_INFINITY];
        let pad = GamepadSnapshot::new(3, &buttons, &axes);

        assert!(pad.button(0));
        assert!(!pad.button(15));
        assert_eq!(pad.axis(0), 0.0);
        assert_eq!(pad.axis(1), 0.0);
        assert_eq!(pad.axis(7), 0.0);
    }

    #[test]
    fn test_slots_fill_in_player_order() {
        let mut slots = GamepadSlots::new(GameMode::Dual);
        assert_eq!(slots.connect(7), Some(PlayerId::One));
        assert_eq!(slots.connect(2), Some(PlayerId::Two));
        assert_eq!(slots.connect(9), None);
        assert_eq!(slots.connect(7), Some(PlayerId::One));

        assert_eq!(slots.disconnect(7), Some(PlayerId::One));
        assert_eq!(slots.player_for(2), Some(PlayerId::Two));
        assert_eq!(slots.connect(9), Some(PlayerId::One));
        assert_eq!(slots.disconnect(42), None);
    }

    #[test]
    fn test_single_mode_has_one_slot() {
        let mut slots = GamepadSlots::new(GameMode::Single);
        assert_eq!(slots.connect(0), Some(PlayerId::One));
        assert_eq!(slots.connect(1), None);
        assert_eq!(slots.connected(), 1);
    }
}
