//! 4D -> 3D projection
//!
//! Two strategies:
//! - Orthographic: drop w, as if viewing from infinitely far along the W axis.
//! - Perspective: divide x, y, z by `camera_distance - w`. Larger w shrinks the
//!   denominator, so points nearer the 4D camera appear larger. This produces
//!   the familiar "cube within a cube" picture of a tesseract.

use serde::{Serialize, Deserialize};

use crate::{GeometryError, Vec3, Vec4};

/// Which projection to use when reducing 4D points to 3D
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    Orthographic,
    #[default]
    Perspective,
}

impl ProjectionMode {
    /// Project with this mode. `camera_distance` is ignored by orthographic.
    pub fn project(self, points: &[Vec4], camera_distance: f64) -> Result<Vec<Vec3>, GeometryError> {
        match self {
            ProjectionMode::Orthographic => Ok(orthographic(points)),
            ProjectionMode::Perspective => perspective(points, camera_distance),
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
        }
    }
}

/// Drop the w coordinate of every point.
pub fn orthographic(points: &[Vec4]) -> Vec<Vec3> {
    points.iter().map(|p| p.xyz()).collect()
}

/// Perspective-divide every point by `camera_distance - w`.
///
/// `camera_distance` must exceed the w of every point; otherwise the scale is
/// zero or negative and the result would be infinite or mirrored, so
/// [`GeometryError::DegenerateProjection`] is returned for the first offending
/// point instead.
pub fn perspective(points: &[Vec4], camera_distance: f64) -> Result<Vec<Vec3>, GeometryError> {
    points
        .iter()
        .map(|p| {
            let scale = camera_distance - p.w;
            if scale > 0.0 {
                Ok(p.xyz() / scale)
            } else {
                Err(GeometryError::DegenerateProjection { camera_distance, w: p.w })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hypercube_corners() -> Vec<Vec4> {
        (0..16)
            .map(|i: usize| {
                let s = |bit: usize| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
                Vec4::new(s(0), s(1), s(2), s(3))
            })
            .collect()
    }

    #[test]
    fn test_orthographic_drops_w() {
        let points = [Vec4::new(1.0, 2.0, 3.0, 4.0), Vec4::new(-5.5, 6.0, 1e9, -8.0)];
        let result = orthographic(&points);
        assert_eq!(result, vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(-5.5, 6.0, 1e9)]);
    }

    #[test]
    fn test_orthographic_empty() {
        assert!(orthographic(&[]).is_empty());
    }

    #[test]
    fn test_perspective_at_w_zero() {
        let result = perspective(&[Vec4::new(3.0, 6.0, 9.0, 0.0)], 3.0).unwrap();
        assert_eq!(result, vec![Vec3::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn test_perspective_at_w_zero_is_exact_division() {
        let p = Vec4::new(0.1, -0.7, 2.3, 0.0);
        let d = 7.0;
        let result = perspective(&[p], d).unwrap();
        assert_eq!(result[0], Vec3::new(0.1 / d, -0.7 / d, 2.3 / d));
    }

    #[test]
    fn test_larger_w_enlarges() {
        let d = 3.0;
        let near = perspective(&[Vec4::new(1.0, 1.0, 1.0, 1.0)], d).unwrap();
        let far = perspective(&[Vec4::new(1.0, 1.0, 1.0, -1.0)], d).unwrap();
        assert!(near[0].length() > far[0].length());
        assert!(near[0].x > far[0].x);
    }

    #[test]
    fn test_tesseract_inner_and_outer_cube() {
        let corners = hypercube_corners();
        let projected = perspective(&corners, 3.0).unwrap();
        for (p, q) in corners.iter().zip(&projected) {
            let expected = if p.w > 0.0 { 3.0f64.sqrt() / 2.0 } else { 3.0f64.sqrt() / 4.0 };
            assert!((q.length() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_large_distance_approaches_scaled_orthographic() {
        let corners = hypercube_corners();
        let d = 1000.0;
        let persp = perspective(&corners, d).unwrap();
        let ortho = orthographic(&corners);
        for (p, o) in persp.iter().zip(&ortho) {
            assert!(p.approx_eq(*o / d, 1e-3));
        }
    }

    #[test]
    fn test_degenerate_projection_rejected() {
        let points = [Vec4::new(1.0, 0.0, 0.0, 0.0), Vec4::new(1.0, 0.0, 0.0, 3.0)];
        assert_eq!(
            perspective(&points, 3.0),
            Err(GeometryError::DegenerateProjection { camera_distance: 3.0, w: 3.0 })
        );
        assert!(perspective(&[Vec4::new(0.0, 0.0, 0.0, 5.0)], 3.0).is_err());
    }

    #[test]
    fn test_mode_dispatch() {
        let points = [Vec4::new(2.0, 4.0, 6.0, 0.0)];
        assert_eq!(
            ProjectionMode::Orthographic.project(&points, 2.0).unwrap(),
            vec![Vec3::new(2.0, 4.0, 6.0)]
        );
        assert_eq!(
            ProjectionMode::Perspective.project(&points, 2.0).unwrap(),
            vec![Vec3::new(1.0, 2.0, 3.0)]
        );
    }

    #[test]
    fn test_mode_toggle_and_default() {
        assert_eq!(ProjectionMode::default(), ProjectionMode::Perspective);
        assert_eq!(ProjectionMode::Perspective.toggled(), ProjectionMode::Orthographic);
        assert_eq!(ProjectionMode::Orthographic.toggled(), ProjectionMode::Perspective);
    }
}
