//! Key presses that act on the application rather than the object
//!
//! Rotation and reset keys are NOT mapped here - they are held-state
//! controls read every tick through the control table.

use tesseract4d_input::key_name;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// One-shot actions triggered on key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F)
    ToggleFullscreen,
    /// Switch between perspective and orthographic 4D projection (P)
    ToggleProjection,
    /// Zero the orbit angles (configurable, Z by default)
    ResetCamera,
}

/// Maps raw key presses to [`AppAction`]s
pub struct ActionMapper {
    camera_reset_control: String,
}

impl Default for ActionMapper {
    fn default() -> Self {
        Self::new("KeyZ")
    }
}

impl ActionMapper {
    pub fn new(camera_reset_control: impl Into<String>) -> Self {
        Self {
            camera_reset_control: camera_reset_control.into(),
        }
    }

    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` on press of a special key, `None` otherwise
    pub fn map_keyboard(&self, key: KeyCode, state: ElementState) -> Option<AppAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(AppAction::Exit),
            KeyCode::KeyF => Some(AppAction::ToggleFullscreen),
            KeyCode::KeyP => Some(AppAction::ToggleProjection),
            _ if key_name(key) == Some(self.camera_reset_control.as_str()) => {
                Some(AppAction::ResetCamera)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = ActionMapper::default().map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(AppAction::Exit));
    }

    #[test]
    fn test_rotation_keys_not_mapped() {
        let mapper = ActionMapper::default();
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyJ, KeyCode::KeyX] {
            let action = mapper.map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = ActionMapper::default().map_keyboard(KeyCode::Escape, ElementState::Released);
        assert_eq!(action, None);
    }

    #[test]
    fn test_special_keys() {
        let mapper = ActionMapper::default();
        assert_eq!(
            mapper.map_keyboard(KeyCode::KeyF, ElementState::Pressed),
            Some(AppAction::ToggleFullscreen)
        );
        assert_eq!(
            mapper.map_keyboard(KeyCode::KeyP, ElementState::Pressed),
            Some(AppAction::ToggleProjection)
        );
        assert_eq!(
            mapper.map_keyboard(KeyCode::KeyZ, ElementState::Pressed),
            Some(AppAction::ResetCamera)
        );
    }

    #[test]
    fn test_camera_reset_rebindable() {
        let mapper = ActionMapper::new("KeyC");
        assert_eq!(mapper.map_keyboard(KeyCode::KeyZ, ElementState::Pressed), None);
        assert_eq!(
            mapper.map_keyboard(KeyCode::KeyC, ElementState::Pressed),
            Some(AppAction::ResetCamera)
        );
    }
}
