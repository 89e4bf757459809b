//! Key mapping from terminal events to physical keys.

use crate::keys::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a terminal key event means to the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Up,
}

/// Map a terminal key code to a game key.
///
/// Terminals report numpad digits as plain digits, so `4`, `5`, `6` and `8`
/// stand in for the numpad keys.
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::KeyA),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::KeyD),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::KeyS),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::KeyW),
        KeyCode::Char('j') | KeyCode::Char('J') => Some(Key::KeyJ),

        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Char('4') => Some(Key::Numpad4),
        KeyCode::Char('6') => Some(Key::Numpad6),
        KeyCode::Char('5') => Some(Key::Numpad5),
        KeyCode::Char('8') => Some(Key::Numpad8),

        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Enter => Some(Key::Enter),

        _ => None,
    }
}

/// Map a full key event, including whether it is a press or a release.
///
/// Terminal auto-repeat events count as presses.
pub fn handle_key_event(key: KeyEvent) -> Option<(Key, KeyPhase)> {
    let phase = match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => KeyPhase::Down,
        KeyEventKind::Release => KeyPhase::Up,
    };
    key_from_code(key.code).map(|k| (k, phase))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should restart the match.
pub fn should_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
