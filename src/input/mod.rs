//! Input handling module
//!
//! Maps window-level keys to application actions. Rotation keys are resolved
//! separately by `tesseract4d_input::InputMapper`.

mod action_mapper;

pub use action_mapper::{ActionMapper, AppAction};
