//! Input translator: raw key and pad state in, per-player actions out.
//!
//! Every tracked input (a key, or one control of an assigned pad) follows the
//! same state machine:
//!
//! - **Released → Pressed**: the bound action fires immediately.
//! - **Pressed → Held**: repeatable actions (move left/right, soft drop)
//!   fire again once `repeat_delay_ms` has passed, then every
//!   `repeat_rate_ms`. Rotate, hard drop and pause fire once per press.
//! - **Release**: state cleared, nothing fires.
//!
//! Rotations additionally pass a per-player debounce gate shared by every
//! source feeding that player. All comparisons use the `now_ms` handed in by
//! the caller, sampled once per frame.

use arrayvec::ArrayVec;

use crate::gamepad::{GamepadSlots, GamepadSnapshot, PadControl};
use crate::keymap::KeyMap;
use crate::keys::Key;
use crate::types::{
    GameAction, GameMode, PlayerAction, PlayerId, DEFAULT_REPEAT_DELAY_MS,
    DEFAULT_REPEAT_RATE_MS, DEFAULT_ROTATE_DEBOUNCE_MS, DEFAULT_STICK_DEADZONE,
};

/// Upper bound of actions produced by one poll; extra actions are dropped.
pub const MAX_ACTIONS_PER_POLL: usize = 32;

pub type Actions = ArrayVec<PlayerAction, MAX_ACTIONS_PER_POLL>;

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers repeats.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputTiming {
    pub repeat_delay_ms: u64,
    pub repeat_rate_ms: u64,
    pub rotate_debounce_ms: u64,
    /// A stick axis must exceed this magnitude to count as pressed.
    pub stick_deadzone: f32,
    /// Release keys whose last raw event is at least this old. `None` trusts
    /// the device to report releases.
    pub key_release_timeout_ms: Option<u64>,
}

impl Default for InputTiming {
    fn default() -> Self {
        Self {
            repeat_delay_ms: DEFAULT_REPEAT_DELAY_MS,
            repeat_rate_ms: DEFAULT_REPEAT_RATE_MS,
            rotate_debounce_ms: DEFAULT_ROTATE_DEBOUNCE_MS,
            stick_deadzone: DEFAULT_STICK_DEADZONE,
            key_release_timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct HeldInput {
    held: bool,
    last_action_ms: u64,
    repeating: bool,
    last_seen_ms: u64,
    /// Held but consumed elsewhere: never fires or repeats until released.
    swallowed: bool,
}

impl HeldInput {
    /// Feed the current pressed state. Returns true when the action should fire.
    fn step(&mut self, pressed: bool, repeatable: bool, now_ms: u64, timing: &InputTiming) -> bool {
        if !pressed {
            *self = Self::default();
            return false;
        }
        if !self.held {
            *self = Self {
                held: true,
                last_action_ms: now_ms,
                repeating: false,
                last_seen_ms: now_ms,
                swallowed: false,
            };
            return true;
        }

        self.last_seen_ms = now_ms;
        repeatable && self.repeat_due(now_ms, timing)
    }

    fn repeat_due(&mut self, now_ms: u64, timing: &InputTiming) -> bool {
        let wait = if self.repeating {
            timing.repeat_rate_ms
        } else {
            timing.repeat_delay_ms
        };
        if now_ms.saturating_sub(self.last_action_ms) < wait {
            return false;
        }
        self.last_action_ms = now_ms;
        self.repeating = true;
        true
    }
}

#[derive(Debug, Clone)]
pub struct InputTranslator {
    timing: InputTiming,
    keymap: KeyMap,
    slots: GamepadSlots,
    keys: [HeldInput; Key::COUNT],
    pads: [[HeldInput; PadControl::COUNT]; 2],
    last_rotate_ms: [Option<u64>; 2],
    pending: Actions,
}

impl InputTranslator {
    pub fn new(mode: GameMode) -> Self {
        Self::with_timing(mode, InputTiming::default())
    }

    pub fn with_timing(mode: GameMode, timing: InputTiming) -> Self {
        Self {
            timing,
            keymap: KeyMap::for_mode(mode),
            slots: GamepadSlots::new(mode),
            keys: [HeldInput::default(); Key::COUNT],
            pads: [[HeldInput::default(); PadControl::COUNT]; 2],
            last_rotate_ms: [None; 2],
            pending: Actions::new(),
        }
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn slots(&self) -> &GamepadSlots {
        &self.slots
    }

    /// Switch key bindings and slot count. Assigned pads keep their player
    /// order; a pad left without a slot is dropped. Held state is cleared.
    pub fn set_mode(&mut self, mode: GameMode) {
        let assigned: ArrayVec<usize, 2> = PlayerId::ALL
            .iter()
            .filter_map(|&player| self.slots.pad_for(player))
            .collect();

        self.keymap = KeyMap::for_mode(mode);
        self.slots = GamepadSlots::new(mode);
        for index in assigned {
            if self.slots.connect(index).is_none() {
                tracing::debug!(pad = index, "gamepad left without a slot");
            }
        }
        self.reset();
    }

    /// Forget every held input, pending action and debounce timestamp.
    pub fn reset(&mut self) {
        self.keys = [HeldInput::default(); Key::COUNT];
        self.pads = [[HeldInput::default(); PadControl::COUNT]; 2];
        self.last_rotate_ms = [None; 2];
        self.pending.clear();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.keys[key.index()].held
    }

    /// Raw key press (or a device auto-repeat of a held key, which only
    /// refreshes the release timeout). A fresh press fires on the next poll.
    pub fn key_down(&mut self, key: Key, now_ms: u64) {
        let binding = self.keymap.lookup(key);
        let repeatable = binding.is_some_and(|b| b.action.is_repeatable());
        let timing = self.timing;

        let fresh = !self.keys[key.index()].held;
        if fresh {
            self.keys[key.index()].step(true, repeatable, now_ms, &timing);
            if let Some(binding) = binding {
                let mut pending = std::mem::take(&mut self.pending);
                self.emit(&mut pending, binding, now_ms);
                self.pending = pending;
            }
        } else {
            self.keys[key.index()].last_seen_ms = now_ms;
        }
    }

    /// Mark a key as held without firing it. Its device repeats are ignored
    /// until a release (or the release timeout) ends the hold.
    pub fn swallow(&mut self, key: Key, now_ms: u64) {
        self.keys[key.index()] = HeldInput {
            held: true,
            last_action_ms: now_ms,
            repeating: false,
            last_seen_ms: now_ms,
            swallowed: true,
        };
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys[key.index()] = HeldInput::default();
    }

    /// Assign a pad to the first free player slot.
    pub fn gamepad_connected(&mut self, index: usize) -> Option<PlayerId> {
        let before = self.slots.player_for(index);
        let player = self.slots.connect(index);
        match player {
            Some(player) if before.is_none() => {
                self.pads[player.index()] = [HeldInput::default(); PadControl::COUNT];
                tracing::debug!(pad = index, player = player.number(), "gamepad assigned");
            }
            Some(_) => {}
            None => tracing::debug!(pad = index, "no free slot for gamepad"),
        }
        player
    }

    pub fn gamepad_disconnected(&mut self, index: usize) -> Option<PlayerId> {
        let player = self.slots.disconnect(index)?;
        self.pads[player.index()] = [HeldInput::default(); PadControl::COUNT];
        tracing::debug!(pad = index, player = player.number(), "gamepad released");
        Some(player)
    }

    /// Produce this frame's actions.
    ///
    /// Order: fresh key presses, key repeats, then pads in the order given.
    /// Snapshots of pads without a slot are ignored.
    pub fn poll(&mut self, now_ms: u64, pads: &[GamepadSnapshot<'_>]) -> Actions {
        let mut out = std::mem::take(&mut self.pending);
        let timing = self.timing;

        if let Some(timeout) = timing.key_release_timeout_ms {
            for record in self.keys.iter_mut() {
                if record.held && now_ms.saturating_sub(record.last_seen_ms) >= timeout {
                    *record = HeldInput::default();
                }
            }
        }

        for key in Key::ALL {
            let Some(binding) = self.keymap.lookup(key) else {
                continue;
            };
            let record = &mut self.keys[key.index()];
            if record.held
                && !record.swallowed
                && binding.action.is_repeatable()
                && record.repeat_due(now_ms, &timing)
            {
                self.emit(&mut out, binding, now_ms);
            }
        }

        for pad in pads {
            let Some(player) = self.slots.player_for(pad.index) else {
                continue;
            };
            for control in PadControl::ALL {
                let pressed = control.is_pressed(pad, timing.stick_deadzone);
                let action = control.action();
                let repeatable = action.is_some_and(|a| a.is_repeatable());

                let record = &mut self.pads[player.index()][control.index()];
                if record.step(pressed, repeatable, now_ms, &timing) {
                    if let Some(action) = action {
                        self.emit(&mut out, PlayerAction::new(player, action), now_ms);
                    }
                }
            }
        }

        out
    }

    fn emit(&mut self, out: &mut Actions, action: PlayerAction, now_ms: u64) {
        if action.action == GameAction::Rotate && !self.accept_rotate(action.player, now_ms) {
            return;
        }
        let _ = out.try_push(action);
    }

    fn accept_rotate(&mut self, player: PlayerId, now_ms: u64) -> bool {
        let debounce = self.timing.rotate_debounce_ms;
        let last = &mut self.last_rotate_ms[player.index()];
        let ready = last.map_or(true, |t| now_ms.saturating_sub(t) >= debounce);
        if ready {
            *last = Some(now_ms);
        }
        ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(list: &Actions) -> Vec<GameAction> {
        list.iter().map(|a| a.action).collect()
    }

    #[test]
    fn test_held_key_repeat_schedule() {
        let mut tr = InputTranslator::new(GameMode::Single);
        tr.key_down(Key::KeyA, 0);
        assert_eq!(actions(&tr.poll(0, &[])), vec![GameAction::MoveLeft]);
        assert!(tr.poll(149, &[]).is_empty());
        assert_eq!(actions(&tr.poll(150, &[])), vec![GameAction::MoveLeft]);
        assert!(tr.poll(249, &[]).is_empty());
        assert_eq!(actions(&tr.poll(250, &[])), vec![GameAction::MoveLeft]);
        assert_eq!(actions(&tr.poll(350, &[])), vec![GameAction::MoveLeft]);
    }

    #[test]
    fn test_release_fires_nothing_and_stops_repeats() {
        let mut tr = InputTranslator::new(GameMode::Single);
        tr.key_down(Key::KeyS, 0);
        tr.key_up(Key::KeyS);
        assert_eq!(actions(&tr.poll(0, &[])), vec![GameAction::SoftDrop]);
        assert!(tr.poll(500, &[]).is_empty());
        assert!(!tr.is_held(Key::KeyS));
    }

    #[test]
    fn test_hard_drop_fires_once_per_press() {
        let mut tr = InputTranslator::new(GameMode::Dual);
        tr.key_down(Key::Space, 0);
        tr.key_down(Key::Space, 30);
        let out = tr.poll(30, &[]);
        assert_eq!(out.as_slice(), &[PlayerAction::new(PlayerId::Two, GameAction::HardDrop)]);
        assert!(tr.poll(1000, &[]).is_empty());
    }

    #[test]
    fn test_rotation_debounce_is_per_player() {
        let mut tr = InputTranslator::new(GameMode::Dual);
        tr.key_down(Key::KeyW, 0);
        tr.key_up(Key::KeyW);
        tr.key_down(Key::ArrowUp, 50);
        tr.key_down(Key::KeyW, 100);
        tr.key_up(Key::KeyW);

        let out = tr.poll(100, &[]);
        assert_eq!(
            out.as_slice(),
            &[
                PlayerAction::new(PlayerId::One, GameAction::Rotate),
                PlayerAction::new(PlayerId::Two, GameAction::Rotate),
            ]
        );

        tr.key_down(Key::KeyW, 150);
        assert_eq!(actions(&tr.poll(150, &[])), vec![GameAction::Rotate]);
    }

    #[test]
    fn test_key_release_timeout() {
        let timing = InputTiming {
            key_release_timeout_ms: Some(50),
            ..InputTiming::default()
        };
        let mut tr = InputTranslator::with_timing(GameMode::Single, timing);
        tr.key_down(Key::ArrowLeft, 0);
        assert_eq!(tr.poll(0, &[]).len(), 1);
        tr.key_down(Key::ArrowLeft, 40);
        assert!(tr.poll(60, &[]).is_empty());
        assert!(tr.is_held(Key::ArrowLeft));

        assert!(tr.poll(90, &[]).is_empty());
        assert!(!tr.is_held(Key::ArrowLeft));
    }

    #[test]
    fn test_set_mode_keeps_first_pad() {
        let mut tr = InputTranslator::new(GameMode::Dual);
        tr.gamepad_connected(4);
        tr.gamepad_connected(5);
        tr.set_mode(GameMode::Single);

        assert_eq!(tr.slots().player_for(4), Some(PlayerId::One));
        assert_eq!(tr.slots().player_for(5), None);
        assert_eq!(
            tr.keymap().lookup(Key::Space).map(|b| b.player),
            Some(PlayerId::One)
        );
    }

    #[test]
    fn test_swallowed_key_waits_for_release() {
        let mut tr = InputTranslator::new(GameMode::Single);
        tr.swallow(Key::Enter, 0);
        tr.key_down(Key::Enter, 30);
        assert!(tr.poll(30, &[]).is_empty());
        assert!(tr.is_held(Key::Enter));

        tr.key_up(Key::Enter);
        tr.key_down(Key::Enter, 400);
        assert_eq!(actions(&tr.poll(400, &[])), vec![GameAction::Pause]);
    }

    #[test]
    fn test_swallowed_movement_never_repeats() {
        let mut tr = InputTranslator::new(GameMode::Single);
        tr.swallow(Key::KeyA, 0);
        assert!(tr.poll(150, &[]).is_empty());
        assert!(tr.poll(1000, &[]).is_empty());
    }
}
