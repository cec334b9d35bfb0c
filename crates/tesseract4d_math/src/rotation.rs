//! Rotation algebra for 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW. A plane is ordered:
//! `yx` rotates in the opposite direction to `xy`, so its matrix is the
//! transpose (inverse) of the `xy` matrix for the same angle.

use std::fmt;
use std::str::FromStr;

use crate::{GeometryError, Mat4};

/// One of the four coordinate axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];

    /// Index into a 4-component vector or matrix row
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::W => 3,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
            Axis::W => 'w',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'x' => Some(Axis::X),
            'y' => Some(Axis::Y),
            'z' => Some(Axis::Z),
            'w' => Some(Axis::W),
            _ => None,
        }
    }
}

/// An ordered pair of distinct axes spanning a rotation plane
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RotationPlane {
    from: Axis,
    to: Axis,
}

impl RotationPlane {
    /// XY plane - roll
    pub const XY: Self = Self { from: Axis::X, to: Axis::Y };
    /// XZ plane - yaw
    pub const XZ: Self = Self { from: Axis::X, to: Axis::Z };
    /// XW plane - ana-kata rotation affecting X
    pub const XW: Self = Self { from: Axis::X, to: Axis::W };
    /// YZ plane - pitch
    pub const YZ: Self = Self { from: Axis::Y, to: Axis::Z };
    /// YW plane - ana-kata rotation affecting Y
    pub const YW: Self = Self { from: Axis::Y, to: Axis::W };
    /// ZW plane - ana-kata rotation affecting Z
    pub const ZW: Self = Self { from: Axis::Z, to: Axis::W };

    /// The six canonical planes
    pub const ALL: [Self; 6] = [Self::XY, Self::XZ, Self::XW, Self::YZ, Self::YW, Self::ZW];

    /// Create a plane from two axes, which must differ
    pub fn new(from: Axis, to: Axis) -> Result<Self, GeometryError> {
        if from == to {
            return Err(GeometryError::InvalidPlane(format!(
                "{}{}",
                from.letter(),
                to.letter()
            )));
        }
        Ok(Self { from, to })
    }

    #[inline]
    pub fn from_axis(&self) -> Axis {
        self.from
    }

    #[inline]
    pub fn to_axis(&self) -> Axis {
        self.to
    }

    /// Same plane, opposite direction
    #[inline]
    pub fn reversed(self) -> Self {
        Self { from: self.to, to: self.from }
    }

    /// Direction-independent form (axes in ascending order)
    pub fn canonical(self) -> Self {
        if self.from <= self.to {
            self
        } else {
            self.reversed()
        }
    }

    /// Whether the plane leaves `axis` fixed
    #[inline]
    pub fn fixes(&self, axis: Axis) -> bool {
        axis != self.from && axis != self.to
    }
}

impl fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from.letter(), self.to.letter())
    }
}

impl FromStr for RotationPlane {
    type Err = GeometryError;

    /// Parse two axis letters, e.g. `"xy"` or `"WZ"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GeometryError::InvalidPlane(s.to_string());
        let mut chars = s.chars();
        let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let from = Axis::from_letter(a).ok_or_else(invalid)?;
        let to = Axis::from_letter(b).ok_or_else(invalid)?;
        if from == to {
            return Err(invalid());
        }
        Ok(Self { from, to })
    }
}

/// Create a rotation matrix in a single plane.
///
/// Identity on every axis except the plane's two, where it embeds a 2D rotation
/// block: row `a` gets `(cos θ, sin θ)` in columns `(a, b)` and row `b` gets
/// `(-sin θ, cos θ)`. Under `v * M` a positive angle turns `a` toward `b`.
pub fn plane_rotation(plane: RotationPlane, angle: f64) -> Mat4 {
    let a = plane.from.index();
    let b = plane.to.index();
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = Mat4::IDENTITY;
    m.0[a][a] = cs;
    m.0[a][b] = sn;
    m.0[b][a] = -sn;
    m.0[b][b] = cs;
    m
}

/// Build a single-plane rotation from a plane name such as `"xw"`.
///
/// Fails with [`GeometryError::InvalidPlane`] for anything but two distinct
/// letters from {x, y, z, w}.
pub fn elementary_rotation(plane: &str, angle: f64) -> Result<Mat4, GeometryError> {
    let plane: RotationPlane = plane.parse()?;
    Ok(plane_rotation(plane, angle))
}

/// Compose transforms left to right.
///
/// `compose([a, b, c])` is `a * b * c`, which applied to a row vector runs `a`
/// first, then `b`, then `c`. An empty input gives the identity.
pub fn compose<I>(transforms: I) -> Mat4
where
    I: IntoIterator<Item = Mat4>,
{
    transforms
        .into_iter()
        .fold(Mat4::IDENTITY, |acc, m| acc * m)
}
