//! 4D Mathematics Library
//!
//! Fixed-size linear algebra, rotation algebra and projections for the
//! tesseract viewer.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D point with x, y, z, w components
//! - [`Vec3`] - projected 3D point
//! - [`Mat4`] - 4x4 row-major matrix acting on row vectors (`v * M`)
//! - [`RotationPlane`] - ordered pair of distinct axes
//!
//! ## Operations
//!
//! - [`plane_rotation`] / [`elementary_rotation`] - single-plane rotations
//! - [`compose`] - left-to-right composition
//! - [`orthographic`] / [`perspective`] - 4D -> 3D projection

mod vec4;
mod vec3;
mod error;
pub mod mat4;
pub mod rotation;
pub mod projection;

pub use vec4::Vec4;
pub use vec3::Vec3;
pub use error::GeometryError;
pub use mat4::Mat4;
pub use rotation::{Axis, RotationPlane, plane_rotation, elementary_rotation, compose};
pub use projection::{ProjectionMode, orthographic, perspective};
