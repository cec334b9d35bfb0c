//! GPU-compatible data types for the line pipeline
//!
//! Layouts match `line.wgsl` exactly.

use bytemuck::{Pod, Zeroable};

use super::IDENTITY;

/// One end of a line segment
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl LineVertex {
    pub fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the line shader
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LineUniforms {
    /// Projection times view, column-major
    pub view_proj: [[f32; 4]; 4],
}

impl Default for LineUniforms {
    fn default() -> Self {
        Self { view_proj: IDENTITY }
    }
}
