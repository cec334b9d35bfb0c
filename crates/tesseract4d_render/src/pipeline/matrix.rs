//! Column-major 4x4 helpers for the 3D view
//!
//! Each inner array is a column, matching WGSL's `mat4x4<f32>` layout.

pub type Mat4f = [[f32; 4]; 4];

pub const IDENTITY: Mat4f = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Right-handed perspective projection with wgpu's 0..1 depth range
pub fn perspective_matrix(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4f {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, near * far * nf, 0.0],
    ]
}

pub fn translation(x: f32, y: f32, z: f32) -> Mat4f {
    let mut m = IDENTITY;
    m[3] = [x, y, z, 1.0];
    m
}

/// Rotation about the X axis, angle in radians
pub fn rotation_x(angle: f32) -> Mat4f {
    let (s, c) = angle.sin_cos();
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, s, 0.0],
        [0.0, -s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Rotation about the Y axis, angle in radians
pub fn rotation_y(angle: f32) -> Mat4f {
    let (s, c) = angle.sin_cos();
    [
        [c, 0.0, -s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// `a * b`: applying the result applies `b` first
pub fn mat4_mul(a: Mat4f, b: Mat4f) -> Mat4f {
    let mut result = [[0.0f32; 4]; 4];
    for col in 0..4 {
        for row in 0..4 {
            result[col][row] = (0..4).map(|k| a[k][row] * b[col][k]).sum();
        }
    }
    result
}

/// Transform a point (w = 1), returning homogeneous coordinates
pub fn transform_point(m: Mat4f, p: [f32; 3]) -> [f32; 4] {
    let v = [p[0], p[1], p[2], 1.0];
    let mut out = [0.0f32; 4];
    for (row, slot) in out.iter_mut().enumerate() {
        *slot = (0..4).map(|col| m[col][row] * v[col]).sum();
    }
    out
}
