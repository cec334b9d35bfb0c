//! Tesseract Input Handling
//!
//! Maps held keys to 4D rotation intents and mouse drag/scroll to the 3D
//! orbit camera.
//!
//! Default rotation controls:
//! - A/D, W/S, Q/E: rotations in XZ, YZ and XY (yaw, pitch, roll)
//! - J/L, I/K, U/O: rotations in XW, YW and ZW
//! - X: reset orientation

mod bindings;
mod input_mapper;
mod key_state;
mod orbit_controller;

pub use bindings::{default_bindings, Binding, BindingSpec, ControlTable, DEFAULT_RESET_CONTROL};
pub use input_mapper::{ActiveControls, FrameInput, InputMapper};
pub use key_state::{key_name, KeyState};
pub use orbit_controller::{OrbitControl, OrbitController};
