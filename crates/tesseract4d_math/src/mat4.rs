//! 4x4 matrix for 4D rotations
//!
//! Matrices are row-major and act on row vectors from the right:
//! `v * M` computes `out[j] = sum_i v[i] * M[i][j]`. With this convention the
//! product `A * B` applies `A` first and then `B`, so a chain of rotations is
//! composed in the same order the rotations are applied.

use crate::Vec4;

/// Row-major 4x4 matrix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4(pub [[f64; 4]; 4]);

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// Identity matrix
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    #[inline]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self(rows)
    }

    /// Get a row as a vector
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.0[i])
    }

    /// Get a column as a vector
    #[inline]
    pub fn column(&self, j: usize) -> Vec4 {
        Vec4::new(self.0[0][j], self.0[1][j], self.0[2][j], self.0[3][j])
    }

    /// Transpose a matrix
    pub fn transpose(&self) -> Self {
        let m = &self.0;
        Self([
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        ])
    }

    /// Transform a row vector: `v * M`
    pub fn transform(&self, v: Vec4) -> Vec4 {
        let m = &self.0;
        Vec4::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + v.w * m[3][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + v.w * m[3][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + v.w * m[3][2],
            v.x * m[0][3] + v.y * m[1][3] + v.z * m[2][3] + v.w * m[3][3],
        )
    }

    /// Determinant by cofactor expansion along the first row
    pub fn determinant(&self) -> f64 {
        let m = &self.0;
        (0..4)
            .map(|j| {
                let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                sign * m[0][j] * self.minor_of_first_row(j)
            })
            .sum()
    }

    /// 3x3 determinant of rows 1..4 with column `skip` removed
    fn minor_of_first_row(&self, skip: usize) -> f64 {
        let cols: [usize; 3] = match skip {
            0 => [1, 2, 3],
            1 => [0, 2, 3],
            2 => [0, 1, 3],
            _ => [0, 1, 2],
        };
        let r = |i: usize, j: usize| self.0[i + 1][cols[j]];
        r(0, 0) * (r(1, 1) * r(2, 2) - r(1, 2) * r(2, 1))
            - r(0, 1) * (r(1, 0) * r(2, 2) - r(1, 2) * r(2, 0))
            + r(0, 2) * (r(1, 0) * r(2, 1) - r(1, 1) * r(2, 0))
    }

    /// Largest absolute element-wise difference
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        let mut max = 0.0f64;
        for i in 0..4 {
            for j in 0..4 {
                max = max.max((self.0[i][j] - other.0[i][j]).abs());
            }
        }
        max
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.max_abs_diff(other) <= tolerance
    }

    /// `M * Mᵗ == I` within tolerance
    pub fn is_orthogonal(&self, tolerance: f64) -> bool {
        (*self * self.transpose()).approx_eq(&Self::IDENTITY, tolerance)
    }

    /// Orthogonal with determinant +1
    pub fn is_rotation(&self, tolerance: f64) -> bool {
        self.is_orthogonal(tolerance) && (self.determinant() - 1.0).abs() <= tolerance
    }

    /// Gram-Schmidt on the rows.
    ///
    /// Repeated multiplication slowly drifts away from orthogonality; this pulls
    /// a nearly-orthogonal matrix back onto the rotation group. Rows that
    /// collapse to zero are left as zero.
    pub fn orthonormalized(&self) -> Self {
        let mut rows = [Vec4::ZERO; 4];
        for i in 0..4 {
            let mut r = self.row(i);
            for prev in rows.iter().take(i) {
                r = r - *prev * r.dot(*prev);
            }
            rows[i] = r.normalized();
        }
        Self(rows.map(Vec4::to_array))
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Self;

    #[allow(clippy::needless_range_loop)]
    fn mul(self, rhs: Self) -> Self {
        let mut result = [[0.0f64; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result[i][j] += self.0[i][k] * rhs.0[k][j];
                }
            }
        }
        Self(result)
    }
}

impl std::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl std::ops::Mul<Mat4> for Vec4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, m: Mat4) -> Vec4 {
        m.transform(self)
    }
}
