//! Tesseract Rendering Library
//!
//! wgpu plumbing that puts projected wireframes on screen. Nothing here
//! knows about 4D: it receives 3D points and index pairs.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - device, queue and surface; frame begin/end
//! - [`pipeline::LinePipeline`] - wgpu `LineList` implementation of [`LineRenderer`]
//! - [`orbit_camera::OrbitCamera`] - mouse-driven 3D view around the origin

pub mod context;
pub mod orbit_camera;
pub mod pipeline;

pub use context::{Frame, RenderContext, RenderError};
pub use orbit_camera::OrbitCamera;
pub use pipeline::{build_line_vertices, perspective_matrix, LinePipeline, LineUniforms, LineVertex};

// Re-export core types for convenience
pub use tesseract4d_core::{Edge, LineRenderer, Vec3};
