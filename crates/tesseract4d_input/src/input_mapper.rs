//! Per-tick resolution of held controls into rotation intents

use std::collections::HashSet;

use tesseract4d_core::{GeometryError, RotationIntent};

use crate::{ControlTable, KeyState};

/// Boolean sensor over named controls
pub trait ActiveControls {
    fn is_active(&self, control: &str) -> bool;
}

impl ActiveControls for HashSet<String> {
    fn is_active(&self, control: &str) -> bool {
        self.contains(control)
    }
}

impl ActiveControls for [&str] {
    fn is_active(&self, control: &str) -> bool {
        self.iter().any(|c| *c == control)
    }
}

impl<const N: usize> ActiveControls for [&str; N] {
    fn is_active(&self, control: &str) -> bool {
        self.iter().any(|c| *c == control)
    }
}

impl ActiveControls for KeyState {
    fn is_active(&self, control: &str) -> bool {
        self.is_named_held(control)
    }
}

/// What the object should do this tick
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Intents in table order
    pub intents: Vec<RotationIntent>,
    pub reset: bool,
}

/// Turns a control table and a per-tick speed into rotation intents
#[derive(Clone, Debug)]
pub struct InputMapper {
    table: ControlTable,
    rotation_speed: f64,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(ControlTable::default(), 0.02).expect("default rotation speed is finite")
    }
}

impl InputMapper {
    /// Fails with [`GeometryError::NonFiniteAngle`] for a NaN or infinite speed
    pub fn new(table: ControlTable, rotation_speed: f64) -> Result<Self, GeometryError> {
        if !rotation_speed.is_finite() {
            return Err(GeometryError::NonFiniteAngle(rotation_speed));
        }
        Ok(Self { table, rotation_speed })
    }

    /// Resolve the held controls.
    ///
    /// Intents come out in the table's declaration order regardless of the
    /// order keys were pressed in, so the same held set always composes the
    /// same way.
    pub fn resolve<C: ActiveControls + ?Sized>(&self, active: &C) -> FrameInput {
        let intents = self
            .table
            .bindings()
            .iter()
            .filter(|b| active.is_active(&b.control))
            .map(|b| RotationIntent::new(b.plane, b.sign * self.rotation_speed))
            .collect();
        FrameInput {
            intents,
            reset: active.is_active(self.table.reset_control()),
        }
    }

    #[inline]
    pub fn table(&self) -> &ControlTable {
        &self.table
    }

    #[inline]
    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }
}
