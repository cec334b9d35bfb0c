//! Tesseract Core Library
//!
//! Polytope structure, tesseract generation and the rotating [`Object4D`].
//!
//! ## Core Types
//!
//! - [`Polytope`] - immutable vertices, edges and faces
//! - [`Object4D`] - a polytope plus accumulated orientation
//! - [`LineRenderer`] - the seam a graphics backend implements

mod polytope_error;
mod polytope;
pub mod tesseract;
mod object;
mod line_renderer;

pub use polytope_error::PolytopeError;
pub use polytope::{Edge, Face, Polytope, Shape4D};
pub use tesseract::{build_tesseract, validate_tesseract};
pub use object::{MotionState, Object4D, RenderFrame, RotationIntent};
pub use line_renderer::LineRenderer;

// Re-export math types for convenience
pub use tesseract4d_math::{GeometryError, Mat4, ProjectionMode, RotationPlane, Vec3, Vec4};
