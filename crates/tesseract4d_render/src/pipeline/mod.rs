//! Line rendering pipeline
//!
//! - [`LinePipeline`] draws buffered segments as a `LineList`
//! - [`build_line_vertices`] turns points and edges into GPU vertices
//! - matrix helpers for the 3D view (column-major, wgpu clip space)

mod line_pipeline;
mod matrix;
mod types;

pub use line_pipeline::{build_line_vertices, LinePipeline};
pub use matrix::{mat4_mul, perspective_matrix, rotation_x, rotation_y, transform_point, translation, IDENTITY};
pub use types::{LineUniforms, LineVertex};
