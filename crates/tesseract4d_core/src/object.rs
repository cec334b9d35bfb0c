//! Rotating 4D object
//!
//! [`Object4D`] pairs a shared, immutable [`Polytope`] with the accumulated
//! orientation that input drives every tick. It is the only owner of that
//! orientation: nothing else mutates it, and rendering reads it without side
//! effects.

use std::sync::Arc;

use tesseract4d_math::{plane_rotation, GeometryError, Mat4, ProjectionMode, RotationPlane, Vec3, Vec4};

use crate::{Edge, Polytope, Shape4D};

/// Largest deviation from `M * Mᵗ = I` and `det = 1` accepted after a tick
const ROTATION_TOLERANCE: f64 = 1e-6;

/// A request to rotate in one plane this tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationIntent {
    pub plane: RotationPlane,
    /// Signed angle in radians applied per tick
    pub speed: f64,
}

impl RotationIntent {
    #[inline]
    pub fn new(plane: RotationPlane, speed: f64) -> Self {
        Self { plane, speed }
    }
}

/// Whether the last tick applied any rotation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionState {
    #[default]
    Idle,
    Rotating,
}

/// Render-ready output: projected points plus the polytope's fixed edges
#[derive(Clone, Debug)]
pub struct RenderFrame<'a> {
    pub points: Vec<Vec3>,
    pub edges: &'a [Edge],
}

/// A polytope with rotation state
pub struct Object4D {
    polytope: Arc<Polytope>,
    orientation: Mat4,
    camera_distance: f64,
    projection: ProjectionMode,
    motion: MotionState,
}

impl Object4D {
    /// Create an object at identity orientation.
    ///
    /// `camera_distance` must exceed the polytope's circumradius so the
    /// perspective projection stays valid for every orientation.
    pub fn new(polytope: Arc<Polytope>, camera_distance: f64) -> Result<Self, GeometryError> {
        check_camera_distance(&polytope, camera_distance)?;
        Ok(Self {
            polytope,
            orientation: Mat4::IDENTITY,
            camera_distance,
            projection: ProjectionMode::Perspective,
            motion: MotionState::Idle,
        })
    }

    /// Builder: choose the projection used by [`Object4D::render_points`]
    pub fn with_projection(mut self, projection: ProjectionMode) -> Self {
        self.projection = projection;
        self
    }

    /// Advance one tick.
    ///
    /// A reset wins over any rotation requested in the same tick. Otherwise
    /// each intent is post-multiplied onto the orientation in slice order, so
    /// the same input produces the same orientation every time.
    ///
    /// Intents with a NaN or infinite speed are dropped. If the result is no
    /// longer a proper rotation the previous orientation is kept.
    pub fn update(&mut self, intents: &[RotationIntent], reset_requested: bool) {
        let previous = self.motion;

        if reset_requested {
            self.orientation = Mat4::IDENTITY;
            self.motion = MotionState::Idle;
            log::debug!("Orientation reset to identity");
            return;
        }

        let mut next = self.orientation;
        let mut applied = 0;
        for intent in intents {
            if !intent.speed.is_finite() {
                log::warn!("Dropped {:?} rotation with non-finite speed {}", intent.plane, intent.speed);
                continue;
            }
            next *= plane_rotation(intent.plane, intent.speed);
            applied += 1;
        }

        if applied == 0 {
            self.motion = MotionState::Idle;
        } else {
            next = next.orthonormalized();
            if next.is_rotation(ROTATION_TOLERANCE) {
                self.orientation = next;
            } else {
                log::warn!("Rotation step left the rotation group; orientation unchanged");
            }
            self.motion = MotionState::Rotating;
        }

        if previous != self.motion {
            log::debug!("Object motion: {:?} -> {:?}", previous, self.motion);
        }
    }

    /// Vertices multiplied by the accumulated orientation
    pub fn transformed_vertices(&self) -> Vec<Vec4> {
        self.polytope
            .vertices()
            .iter()
            .map(|v| *v * self.orientation)
            .collect()
    }

    /// Rotate, project, and pair with the fixed edge list
    pub fn render_points(&self) -> Result<RenderFrame<'_>, GeometryError> {
        let points = self
            .projection
            .project(&self.transformed_vertices(), self.camera_distance)?;
        Ok(RenderFrame {
            points,
            edges: self.polytope.edges(),
        })
    }

    #[inline]
    pub fn orientation(&self) -> &Mat4 {
        &self.orientation
    }

    #[inline]
    pub fn motion_state(&self) -> MotionState {
        self.motion
    }

    #[inline]
    pub fn polytope(&self) -> &Arc<Polytope> {
        &self.polytope
    }

    #[inline]
    pub fn camera_distance(&self) -> f64 {
        self.camera_distance
    }

    /// Change the 4D camera distance, keeping the old one if the new one is too close
    pub fn set_camera_distance(&mut self, camera_distance: f64) -> Result<(), GeometryError> {
        check_camera_distance(&self.polytope, camera_distance)?;
        self.camera_distance = camera_distance;
        Ok(())
    }

    #[inline]
    pub fn projection(&self) -> ProjectionMode {
        self.projection
    }

    pub fn set_projection(&mut self, projection: ProjectionMode) {
        self.projection = projection;
    }
}

fn check_camera_distance(polytope: &Polytope, camera_distance: f64) -> Result<(), GeometryError> {
    let radius = polytope.circumradius();
    if camera_distance > radius {
        Ok(())
    } else {
        Err(GeometryError::CameraTooClose {
            camera_distance,
            circumradius: radius,
        })
    }
}
