//! Geometry error types

use std::fmt;

/// Error type for rotation and projection operations
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A plane specifier that is not two distinct axis letters from {x, y, z, w}
    InvalidPlane(String),
    /// Perspective projection with `camera_distance - w <= 0` for some point
    DegenerateProjection {
        camera_distance: f64,
        w: f64,
    },
    /// A 4D camera no farther from the origin than the object's farthest vertex
    CameraTooClose {
        camera_distance: f64,
        circumradius: f64,
    },
    /// A rotation angle, speed, or binding sign that is NaN or infinite
    NonFiniteAngle(f64),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidPlane(plane) => write!(
                f,
                "Invalid rotation plane '{}': expected two distinct axes from x, y, z, w",
                plane
            ),
            GeometryError::DegenerateProjection { camera_distance, w } => write!(
                f,
                "Degenerate projection: camera distance {} does not exceed w = {}",
                camera_distance, w
            ),
            GeometryError::CameraTooClose { camera_distance, circumradius } => write!(
                f,
                "Camera distance {} does not exceed the object's circumradius {}",
                camera_distance, circumradius
            ),
            GeometryError::NonFiniteAngle(angle) => {
                write!(f, "Rotation angle {} is not finite", angle)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
