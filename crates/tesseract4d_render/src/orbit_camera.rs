//! Orbiting 3D camera
//!
//! The camera sits on a sphere around the origin. Its whole state is two
//! angles and a distance; the view matrix is rebuilt from that state every
//! frame, so nothing accumulates across frames except the state itself.

use tesseract4d_input::OrbitControl;

use crate::pipeline::{mat4_mul, rotation_x, rotation_y, translation};

/// Mouse-driven view around the origin
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Rotation about the X axis in degrees (vertical drag)
    pub rot_x: f32,
    /// Rotation about the Y axis in degrees (horizontal drag)
    pub rot_y: f32,
    pub distance: f32,
    /// Distance the camera eases toward
    pub target_distance: f32,
    /// Fraction of the remaining zoom gap closed per frame, in (0, 1]
    pub zoom_speed: f32,
    pub min_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(3.0)
    }
}

impl OrbitCamera {
    pub fn new(distance: f32) -> Self {
        Self {
            rot_x: 0.0,
            rot_y: 0.0,
            distance,
            target_distance: distance,
            zoom_speed: 0.1,
            min_distance: 1.0,
        }
    }

    /// Builder: set the zoom easing factor
    pub fn with_zoom_speed(mut self, zoom_speed: f32) -> Self {
        self.zoom_speed = zoom_speed;
        self
    }

    /// Builder: set the closest allowed distance
    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance;
        self.target_distance = self.target_distance.max(min_distance);
        self
    }

    /// Ease the distance toward its target; call once per frame
    pub fn update(&mut self) {
        self.distance += (self.target_distance - self.distance) * self.zoom_speed;
    }

    /// Zero both orbit angles, keeping the zoom
    pub fn reset(&mut self) {
        self.rot_x = 0.0;
        self.rot_y = 0.0;
    }

    /// World-to-view transform: rotate about Y, then X, then push back by `distance`
    pub fn view_matrix(&self) -> [[f32; 4]; 4] {
        let rotation = mat4_mul(
            rotation_x(self.rot_x.to_radians()),
            rotation_y(self.rot_y.to_radians()),
        );
        mat4_mul(translation(0.0, 0.0, -self.distance), rotation)
    }
}

impl OrbitControl for OrbitCamera {
    fn orbit(&mut self, delta_rot_x: f32, delta_rot_y: f32) {
        self.rot_x += delta_rot_x;
        self.rot_y += delta_rot_y;
    }

    fn zoom(&mut self, delta: f32) {
        self.target_distance = (self.target_distance + delta).max(self.min_distance);
    }
}
