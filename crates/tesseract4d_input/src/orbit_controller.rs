//! Mouse orbit for the 3D view
//!
//! Controls:
//! - Left drag: orbit around the origin (horizontal drag turns about Y,
//!   vertical drag about X)
//! - Scroll: zoom toward or away from the origin

use winit::event::{ElementState, MouseButton};

/// Accumulates mouse input between frames
pub struct OrbitController {
    dragging: bool,
    pending_dx: f64,
    pending_dy: f64,
    pending_scroll: f64,

    /// Degrees of orbit per pixel dragged
    pub sensitivity: f32,
    /// Distance change per scroll line
    pub zoom_sensitivity: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            dragging: false,
            pending_dx: 0.0,
            pending_dy: 0.0,
            pending_scroll: 0.0,
            sensitivity: 0.25,
            zoom_sensitivity: 0.25,
        }
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state == ElementState::Pressed;
        }
    }

    /// Raw pointer motion; ignored unless dragging
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.dragging {
            self.pending_dx += delta_x;
            self.pending_dy += delta_y;
        }
    }

    /// Scroll in lines, positive away from the user
    pub fn process_scroll(&mut self, lines: f64) {
        self.pending_scroll += lines;
    }

    /// Apply and clear the accumulated input
    pub fn update<C: OrbitControl>(&mut self, camera: &mut C) {
        if self.pending_dx != 0.0 || self.pending_dy != 0.0 {
            camera.orbit(
                self.pending_dy as f32 * self.sensitivity,
                self.pending_dx as f32 * self.sensitivity,
            );
        }
        if self.pending_scroll != 0.0 {
            camera.zoom(-(self.pending_scroll as f32) * self.zoom_sensitivity);
        }

        self.pending_dx = 0.0;
        self.pending_dy = 0.0;
        self.pending_scroll = 0.0;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Builder: set orbit sensitivity in degrees per pixel
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Builder: set distance change per scroll line
    pub fn with_zoom_sensitivity(mut self, zoom_sensitivity: f32) -> Self {
        self.zoom_sensitivity = zoom_sensitivity;
        self
    }
}

/// Trait for orbit cameras driven by [`OrbitController`]
pub trait OrbitControl {
    /// Add to the X and Y orbit angles, in degrees
    fn orbit(&mut self, delta_rot_x: f32, delta_rot_y: f32);
    /// Move the target distance; implementors clamp it to their minimum
    fn zoom(&mut self, delta: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockCamera {
        rot_x: f32,
        rot_y: f32,
        target_distance: f32,
    }

    impl OrbitControl for MockCamera {
        fn orbit(&mut self, delta_rot_x: f32, delta_rot_y: f32) {
            self.rot_x += delta_rot_x;
            self.rot_y += delta_rot_y;
        }

        fn zoom(&mut self, delta: f32) {
            self.target_distance = (self.target_distance + delta).max(1.0);
        }
    }

    #[test]
    fn test_motion_without_drag_ignored() {
        let mut controller = OrbitController::new();
        let mut camera = MockCamera::default();
        controller.process_mouse_motion(40.0, 10.0);
        controller.update(&mut camera);
        assert_eq!(camera.rot_x, 0.0);
        assert_eq!(camera.rot_y, 0.0);
    }

    #[test]
    fn test_drag_orbits() {
        let mut controller = OrbitController::new();
        let mut camera = MockCamera::default();
        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(controller.is_dragging());
        controller.process_mouse_motion(40.0, 8.0);
        controller.update(&mut camera);
        assert_eq!(camera.rot_y, 10.0);
        assert_eq!(camera.rot_x, 2.0);

        // Pending motion is consumed
        controller.update(&mut camera);
        assert_eq!(camera.rot_y, 10.0);
    }

    #[test]
    fn test_release_stops_drag() {
        let mut controller = OrbitController::new();
        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_right_button_does_not_drag() {
        let mut controller = OrbitController::new();
        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_scroll_up_zooms_in() {
        let mut controller = OrbitController::new().with_zoom_sensitivity(0.5);
        let mut camera = MockCamera { target_distance: 3.0, ..Default::default() };
        controller.process_scroll(2.0);
        controller.update(&mut camera);
        assert_eq!(camera.target_distance, 2.0);
    }
}
