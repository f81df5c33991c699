//! Keyboard to movement intent
//!
//! Raw key codes (DOM `keyCode` values) come in from the host's key events
//! and collapse into a single intent for the player's paddle.

use crate::ports::InputPort;
use crate::sim::MoveIntent;

/// ArrowUp, W, Numpad 8
pub const UP_KEYS: [u32; 3] = [38, 87, 104];
/// ArrowDown, S, Numpad 5
pub const DOWN_KEYS: [u32; 3] = [40, 83, 101];

/// Intent bound to a key code, if any
pub fn intent_for_key(code: u32) -> Option<MoveIntent> {
    if UP_KEYS.contains(&code) {
        Some(MoveIntent::Up)
    } else if DOWN_KEYS.contains(&code) {
        Some(MoveIntent::Down)
    } else {
        None
    }
}

/// Tracks the latest key events
#[derive(Debug, Clone, Default)]
pub struct KeyboardInput {
    intent: MoveIntent,
    armed: bool,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. Returns true for the first press of the session,
    /// which is the host's cue to start the loop.
    pub fn key_down(&mut self, code: u32) -> bool {
        if let Some(intent) = intent_for_key(code) {
            self.intent = intent;
        }
        let first = !self.armed;
        self.armed = true;
        first
    }

    /// Any release stops the paddle, even if another key is still held
    pub fn key_up(&mut self, _code: u32) {
        self.intent = MoveIntent::Stopped;
    }

    /// Whether any key has been pressed yet
    pub fn armed(&self) -> bool {
        self.armed
    }

    pub fn current(&self) -> MoveIntent {
        self.intent
    }
}

impl InputPort for KeyboardInput {
    fn intent(&mut self) -> MoveIntent {
        self.intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        for code in UP_KEYS {
            assert_eq!(intent_for_key(code), Some(MoveIntent::Up));
        }
        for code in DOWN_KEYS {
            assert_eq!(intent_for_key(code), Some(MoveIntent::Down));
        }
        assert_eq!(intent_for_key(32), None);
    }

    #[test]
    fn test_first_press_arms() {
        let mut keys = KeyboardInput::new();
        assert!(!keys.armed());
        // Unbound key still arms but leaves the paddle alone
        assert!(keys.key_down(32));
        assert!(keys.armed());
        assert_eq!(keys.current(), MoveIntent::Stopped);
        assert!(!keys.key_down(38));
        assert_eq!(keys.intent(), MoveIntent::Up);
    }

    #[test]
    fn test_release_stops() {
        let mut keys = KeyboardInput::new();
        keys.key_down(83);
        assert_eq!(keys.current(), MoveIntent::Down);
        keys.key_down(87);
        assert_eq!(keys.current(), MoveIntent::Up);
        keys.key_up(83);
        assert_eq!(keys.current(), MoveIntent::Stopped);
    }
}
