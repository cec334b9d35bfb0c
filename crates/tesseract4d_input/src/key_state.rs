//! Held-key tracking for winit keyboard events

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Keys currently held down
#[derive(Clone, Debug, Default)]
pub struct KeyState {
    held: HashSet<KeyCode>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. Returns true if the key has a control name.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        match state {
            ElementState::Pressed => {
                self.held.insert(key);
            }
            ElementState::Released => {
                self.held.remove(&key);
            }
        }
        key_name(key).is_some()
    }

    #[inline]
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether any held key is called `name`
    pub fn is_named_held(&self, name: &str) -> bool {
        self.held.iter().any(|&key| key_name(key) == Some(name))
    }

    /// Drop every held key, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}

/// Control name for a physical key, matching winit's `KeyCode` variant names
pub fn key_name(key: KeyCode) -> Option<&'static str> {
    let name = match key {
        KeyCode::KeyA => "KeyA",
        KeyCode::KeyB => "KeyB",
        KeyCode::KeyC => "KeyC",
        KeyCode::KeyD => "KeyD",
        KeyCode::KeyE => "KeyE",
        KeyCode::KeyF => "KeyF",
        KeyCode::KeyG => "KeyG",
        KeyCode::KeyH => "KeyH",
        KeyCode::KeyI => "KeyI",
        KeyCode::KeyJ => "KeyJ",
        KeyCode::KeyK => "KeyK",
        KeyCode::KeyL => "KeyL",
        KeyCode::KeyM => "KeyM",
        KeyCode::KeyN => "KeyN",
        KeyCode::KeyO => "KeyO",
        KeyCode::KeyP => "KeyP",
        KeyCode::KeyQ => "KeyQ",
        KeyCode::KeyR => "KeyR",
        KeyCode::KeyS => "KeyS",
        KeyCode::KeyT => "KeyT",
        KeyCode::KeyU => "KeyU",
        KeyCode::KeyV => "KeyV",
        KeyCode::KeyW => "KeyW",
        KeyCode::KeyX => "KeyX",
        KeyCode::KeyY => "KeyY",
        KeyCode::KeyZ => "KeyZ",
        KeyCode::Digit0 => "Digit0",
        KeyCode::Digit1 => "Digit1",
        KeyCode::Digit2 => "Digit2",
        KeyCode::Digit3 => "Digit3",
        KeyCode::Digit4 => "Digit4",
        KeyCode::Digit5 => "Digit5",
        KeyCode::Digit6 => "Digit6",
        KeyCode::Digit7 => "Digit7",
        KeyCode::Digit8 => "Digit8",
        KeyCode::Digit9 => "Digit9",
        KeyCode::ArrowUp => "ArrowUp",
        KeyCode::ArrowDown => "ArrowDown",
        KeyCode::ArrowLeft => "ArrowLeft",
        KeyCode::ArrowRight => "ArrowRight",
        KeyCode::Space => "Space",
        KeyCode::Enter => "Enter",
        KeyCode::Tab => "Tab",
        KeyCode::Backspace => "Backspace",
        KeyCode::Escape => "Escape",
        KeyCode::ShiftLeft => "ShiftLeft",
        KeyCode::ShiftRight => "ShiftRight",
        KeyCode::ControlLeft => "ControlLeft",
        KeyCode::ControlRight => "ControlRight",
        KeyCode::AltLeft => "AltLeft",
        KeyCode::AltRight => "AltRight",
        KeyCode::Comma => "Comma",
        KeyCode::Period => "Period",
        KeyCode::Slash => "Slash",
        KeyCode::Semicolon => "Semicolon",
        KeyCode::Quote => "Quote",
        KeyCode::BracketLeft => "BracketLeft",
        KeyCode::BracketRight => "BracketRight",
        KeyCode::Minus => "Minus",
        KeyCode::Equal => "Equal",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyState::new();
        assert!(keys.process_keyboard(KeyCode::KeyA, ElementState::Pressed));
        assert!(keys.is_held(KeyCode::KeyA));
        assert!(keys.is_named_held("KeyA"));

        keys.process_keyboard(KeyCode::KeyA, ElementState::Released);
        assert!(!keys.is_held(KeyCode::KeyA));
        assert!(!keys.is_named_held("KeyA"));
    }

    #[test]
    fn test_repeat_press_counts_once() {
        let mut keys = KeyState::new();
        keys.process_keyboard(KeyCode::KeyJ, ElementState::Pressed);
        keys.process_keyboard(KeyCode::KeyJ, ElementState::Pressed);
        assert_eq!(keys.held_count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut keys = KeyState::new();
        keys.process_keyboard(KeyCode::KeyI, ElementState::Pressed);
        keys.process_keyboard(KeyCode::KeyK, ElementState::Pressed);
        keys.clear();
        assert_eq!(keys.held_count(), 0);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(key_name(KeyCode::KeyX), Some("KeyX"));
        assert_eq!(key_name(KeyCode::Digit1), Some("Digit1"));
        assert_eq!(key_name(KeyCode::ArrowUp), Some("ArrowUp"));
        assert_eq!(key_name(KeyCode::F24), None);
    }

    #[test]
    fn test_unnamed_key_still_tracked() {
        let mut keys = KeyState::new();
        assert!(!keys.process_keyboard(KeyCode::F24, ElementState::Pressed));
        assert!(keys.is_held(KeyCode::F24));
    }
}
