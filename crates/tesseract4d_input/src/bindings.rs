//! Control-to-plane binding tables
//!
//! A [`ControlTable`] is plain configuration handed to the
//! [`crate::InputMapper`]: nothing here is process-wide state. Controls are
//! named by string (winit key names such as `KeyA`) so a table can come from
//! a config file as easily as from code.

use serde::{Deserialize, Serialize};
use tesseract4d_math::{GeometryError, RotationPlane};

/// Control that snaps the orientation back to identity
pub const DEFAULT_RESET_CONTROL: &str = "KeyX";

/// Left hand drives the 3D planes, right hand the planes through W.
const DEFAULT_TABLE: [(&str, RotationPlane, f64); 12] = [
    ("KeyA", RotationPlane::XZ, 1.0),
    ("KeyD", RotationPlane::XZ, -1.0),
    ("KeyW", RotationPlane::YZ, -1.0),
    ("KeyS", RotationPlane::YZ, 1.0),
    ("KeyQ", RotationPlane::XY, 1.0),
    ("KeyE", RotationPlane::XY, -1.0),
    ("KeyJ", RotationPlane::XW, -1.0),
    ("KeyL", RotationPlane::XW, 1.0),
    ("KeyI", RotationPlane::YW, 1.0),
    ("KeyK", RotationPlane::YW, -1.0),
    ("KeyU", RotationPlane::ZW, 1.0),
    ("KeyO", RotationPlane::ZW, -1.0),
];

/// Serialisable binding as it appears in configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BindingSpec {
    /// Control name, e.g. `KeyA`
    pub control: String,
    /// Plane specifier, e.g. `xz`
    pub plane: String,
    /// Direction multiplier applied to the rotation speed
    pub sign: f64,
}

impl BindingSpec {
    pub fn new(control: impl Into<String>, plane: impl Into<String>, sign: f64) -> Self {
        Self {
            control: control.into(),
            plane: plane.into(),
            sign,
        }
    }
}

/// The built-in bindings in declaration order
pub fn default_bindings() -> Vec<BindingSpec> {
    DEFAULT_TABLE
        .iter()
        .map(|(control, plane, sign)| BindingSpec::new(*control, plane.to_string(), *sign))
        .collect()
}

/// A parsed binding
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub control: String,
    pub plane: RotationPlane,
    pub sign: f64,
}

/// Ordered rotation bindings plus the reset control
#[derive(Clone, Debug, PartialEq)]
pub struct ControlTable {
    bindings: Vec<Binding>,
    reset_control: String,
}

impl Default for ControlTable {
    fn default() -> Self {
        Self {
            bindings: DEFAULT_TABLE
                .iter()
                .map(|(control, plane, sign)| Binding {
                    control: control.to_string(),
                    plane: *plane,
                    sign: *sign,
                })
                .collect(),
            reset_control: DEFAULT_RESET_CONTROL.to_string(),
        }
    }
}

impl ControlTable {
    /// Parse every plane up front; the first bad specifier or non-finite
    /// sign fails the table
    pub fn new(specs: &[BindingSpec], reset_control: impl Into<String>) -> Result<Self, GeometryError> {
        let bindings = specs
            .iter()
            .map(|spec| {
                if !spec.sign.is_finite() {
                    return Err(GeometryError::NonFiniteAngle(spec.sign));
                }
                Ok(Binding {
                    control: spec.control.clone(),
                    plane: spec.plane.parse()?,
                    sign: spec.sign,
                })
            })
            .collect::<Result<Vec<_>, GeometryError>>()?;

        let table = Self {
            bindings,
            reset_control: reset_control.into(),
        };
        if !table.covers_all_planes() {
            log::warn!("Control table does not bind every rotation plane in both directions");
        }
        Ok(table)
    }

    /// Bindings in declaration order
    #[inline]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    #[inline]
    pub fn reset_control(&self) -> &str {
        &self.reset_control
    }

    /// Whether all six planes can be rotated both ways.
    ///
    /// A binding on a reversed plane (`zx`) counts as the opposite direction
    /// of its canonical plane (`xz`).
    pub fn covers_all_planes(&self) -> bool {
        RotationPlane::ALL.iter().all(|&plane| {
            let directions = self
                .bindings
                .iter()
                .filter(|b| b.plane.canonical() == plane && b.sign != 0.0)
                .map(|b| if b.plane == plane { b.sign } else { -b.sign });
            let (mut positive, mut negative) = (false, false);
            for d in directions {
                positive |= d > 0.0;
                negative |= d < 0.0;
            }
            positive && negative
        })
    }
}
